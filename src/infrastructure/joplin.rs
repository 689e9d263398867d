// src/infrastructure/joplin.rs
use crate::application::NoteService;
use crate::config::JoplinConnection;
use crate::domain::{CreatedNote, NewNote, Resource, ResourceKind, ServiceError};
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use super::{ensure_success, read_json, transport_error};

/// Client for the Joplin data API exposed by the Web Clipper service.
pub struct JoplinClient {
    base_url: String,
    token: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    // a plain `default` would demand `T: Default`
    #[serde(default = "Vec::new")]
    items: Vec<T>,
    #[serde(default)]
    has_more: bool,
}

#[derive(Debug, Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct NoteRef<'a> {
    id: &'a str,
}

impl JoplinClient {
    pub fn new(connection: &JoplinConnection) -> Self {
        Self::with_http_client(connection, Client::new())
    }

    pub fn with_http_client(connection: &JoplinConnection, client: Client) -> Self {
        Self {
            base_url: connection.base_url.trim_end_matches('/').to_string(),
            token: connection.token.clone(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.url(path))
            .query(&[("token", self.token.as_str())])
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client
            .post(self.url(path))
            .query(&[("token", self.token.as_str())])
    }
}

/// Send without leaking the token-bearing URL into error messages.
fn send(request: RequestBuilder) -> Result<reqwest::blocking::Response, ServiceError> {
    request.send().map_err(|e| transport_error(e.without_url()))
}

impl NoteService for JoplinClient {
    #[instrument(level = "debug", skip(self))]
    fn list_resources(&mut self, kind: ResourceKind) -> Result<Vec<Resource>, ServiceError> {
        let mut resources = Vec::new();
        let mut page_no = 1u32;
        loop {
            let page_param = page_no.to_string();
            let page: Page<Resource> = read_json(send(
                self.get(kind.collection())
                    .query(&[("fields", "id,title"), ("page", page_param.as_str())]),
            )?)?;
            trace!(page = page_no, items = page.items.len(), "Fetched page");
            resources.extend(page.items);
            if !page.has_more {
                break;
            }
            page_no += 1;
        }
        debug!(count = resources.len(), "Listed {}", kind.collection());
        Ok(resources)
    }

    #[instrument(level = "debug", skip(self))]
    fn create_resource(
        &mut self,
        kind: ResourceKind,
        title: &str,
    ) -> Result<Resource, ServiceError> {
        read_json(send(
            self.post(kind.collection()).json(&TitleBody { title }),
        )?)
    }

    #[instrument(level = "debug", skip(self, note), fields(title = %note.title))]
    fn create_note(&mut self, note: &NewNote) -> Result<CreatedNote, ServiceError> {
        read_json(send(self.post("notes").json(note))?)
    }

    #[instrument(level = "debug", skip(self))]
    fn tag_note(&mut self, tag_id: &str, note_id: &str) -> Result<(), ServiceError> {
        let path = format!("tags/{}/notes", tag_id);
        ensure_success(send(self.post(&path).json(&NoteRef { id: note_id }))?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection(url: &str) -> JoplinConnection {
        JoplinConnection {
            base_url: url.to_string(),
            token: "secret".to_string(),
        }
    }

    #[test]
    fn given_trailing_slash_when_creating_client_then_trims_base_url() {
        let client = JoplinClient::new(&connection("http://localhost:41184/"));

        assert_eq!(client.base_url(), "http://localhost:41184");
        assert_eq!(client.url("tags"), "http://localhost:41184/tags");
    }

    #[test]
    fn given_tag_listing_when_decoding_then_reads_items_and_has_more() {
        let body = r#"{"items": [{"id": "t1", "title": "to_read"}], "has_more": true}"#;

        let page: Page<Resource> = serde_json::from_str(body).unwrap();

        assert!(page.has_more);
        assert_eq!(
            page.items,
            vec![Resource {
                id: "t1".to_string(),
                title: "to_read".to_string(),
            }]
        );
    }

    #[test]
    fn given_listing_without_paging_fields_when_decoding_then_defaults_to_single_page() {
        let page: Page<Resource> = serde_json::from_str(r#"{"items": []}"#).unwrap();

        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }

    #[test]
    fn given_listing_without_items_when_decoding_then_yields_empty_page() {
        let page: Page<Resource> = serde_json::from_str(r#"{"has_more": false}"#).unwrap();

        assert!(page.items.is_empty());
    }

    #[test]
    fn given_created_entity_with_extra_fields_when_decoding_then_keeps_id() {
        let body = r#"{"id": "n1", "title": "Foo", "parent_id": "f1", "created_time": 1}"#;

        let note: CreatedNote = serde_json::from_str(body).unwrap();

        assert_eq!(note.id, "n1");
    }

    #[test]
    fn given_note_id_when_building_association_body_then_carries_only_id() {
        let json = serde_json::to_value(NoteRef { id: "n1" }).unwrap();

        assert_eq!(json, serde_json::json!({"id": "n1"}));
    }
}
