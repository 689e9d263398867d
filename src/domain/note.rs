// src/domain/note.rs
use crate::domain::Article;
use serde::{Deserialize, Serialize};

/// Payload for creating a Joplin note. The body holds the article URL as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewNote {
    pub title: String,
    pub body: String,
    pub parent_id: String,
}

impl NewNote {
    pub fn from_article(article: &Article, folder_id: &str) -> Self {
        Self {
            title: article.title.clone(),
            body: article.url.clone(),
            parent_id: folder_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedNote {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_article_when_building_note_then_maps_title_url_and_folder() {
        let article = Article::new("42", "Foo", "https://example.com");

        let note = NewNote::from_article(&article, "f1");

        assert_eq!(note.title, "Foo");
        assert_eq!(note.body, "https://example.com");
        assert_eq!(note.parent_id, "f1");
    }

    #[test]
    fn given_new_note_when_serializing_then_uses_joplin_field_names() {
        let note = NewNote {
            title: "Foo".to_string(),
            body: "u".to_string(),
            parent_id: "f1".to_string(),
        };

        let json = serde_json::to_value(&note).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"title": "Foo", "body": "u", "parent_id": "f1"})
        );
    }
}
