use thiserror::Error;

use crate::http::TransportError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),
    #[error("bad status code: {0}")]
    BadStatusCode(u16),
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
}
