// src/infrastructure/mod.rs
pub mod joplin;
pub mod pocket;

pub use joplin::JoplinClient;
pub use pocket::PocketClient;

use crate::domain::ServiceError;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;

/// Decode a JSON body, turning non-success statuses into [`ServiceError::Status`].
fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ServiceError> {
    let resp = ensure_success(resp)?;
    resp.json::<T>()
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

fn ensure_success(resp: Response) -> Result<Response, ServiceError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}

fn transport_error(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}
