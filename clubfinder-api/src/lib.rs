pub mod clubs;
pub mod http;

mod error;

use std::sync::Arc;

use crate::clubs::ClubsClient;
use crate::http::{Request, RequestBuilder, Response};

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The base url used when no other is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// A client for the ClubFinder backend.
///
/// Cloning a `Client` is cheap. All clones share the same base url and connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    base_url: Arc<str>,
    http: crate::http::Client,
}

impl Client {
    /// Creates a new `Client` for the backend at `base_url`. A trailing `/` is ignored.
    pub fn new<T>(base_url: T) -> Self
    where
        T: AsRef<str>,
    {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').into(),
            http: crate::http::Client::new(),
        }
    }

    /// Returns the base url of the backend, without a trailing `/`.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn clubs(&self) -> ClubsClient<'_> {
        ClubsClient::new(self)
    }

    /// Returns a new [`RequestBuilder`] pointing at the base url.
    pub(crate) fn request(&self) -> RequestBuilder {
        RequestBuilder::new(self.base_url.to_string())
    }

    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        self.http.send(request).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}
