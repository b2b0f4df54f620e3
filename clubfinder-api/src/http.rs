//! The HTTP transport.
//!
//! Native targets use `hyper`, wasm targets use the browser fetch API through `reqwasm`. Both
//! expose the same [`Client`], [`Request`] and [`Response`] types.
use crate::{Error, Result};

use http::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct TransportError {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    #[from]
    error: hyper::Error,
    #[cfg(target_family = "wasm")]
    #[from]
    error: reqwasm::Error,
}

#[derive(Clone, Debug, Default)]
pub struct Client {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerClient,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerClient,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send(&self, request: Request) -> Result<Response> {
        log::debug!("GET {}", request.uri);

        self.inner.send(request).await
    }
}

/// A `GET` request.
#[derive(Clone, Debug, Default)]
pub struct Request {
    uri: String,
    headers: Vec<(&'static str, String)>,
}

impl Request {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestBuilder {
    inner: Request,
}

impl RequestBuilder {
    pub fn new(uri: String) -> Self {
        let inner = Request {
            uri,
            headers: vec![("accept", String::from("application/json"))],
        };

        Self { inner }
    }

    /// Appends `uri` to the request uri.
    pub fn uri(mut self, uri: &str) -> Self {
        self.inner.uri.push_str(uri);
        self
    }

    /// Adds an header to the request.
    pub fn header<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: ToString,
    {
        self.inner.headers.push((key, value.to_string()));
        self
    }

    pub fn build(self) -> Request {
        self.inner
    }
}

impl From<RequestBuilder> for Request {
    fn from(req: RequestBuilder) -> Self {
        req.inner
    }
}

#[derive(Debug)]
pub struct Response {
    #[cfg(any(target_family = "unix", target_family = "windows"))]
    inner: unix::InnerResponse,
    #[cfg(target_family = "wasm")]
    inner: wasm::InnerResponse,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.inner.status()
    }

    /// Returns `true` if the response contains a 2xx status code.
    pub fn is_success(&self) -> bool {
        self.status().is_success()
    }

    /// Returns [`Error::BadStatusCode`] unless the response contains a 2xx status code.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::BadStatusCode(self.status().as_u16()))
        }
    }

    /// Reads the whole body and decodes it as json.
    pub async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let body = self.inner.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod unix {
    use super::{Request, Response, TransportError};
    use crate::Result;

    use http::StatusCode;
    use hyper::{body, client::HttpConnector, Body};

    #[derive(Clone, Debug)]
    pub struct InnerClient {
        inner: hyper::Client<HttpConnector>,
    }

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let req = hyper::Request::try_from(request)?;

            let resp = self
                .inner
                .request(req)
                .await
                .map_err(TransportError::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    impl Default for InnerClient {
        fn default() -> Self {
            Self {
                inner: hyper::Client::new(),
            }
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(hyper::Response<Body>);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            self.0.status()
        }

        pub async fn bytes(self) -> Result<Vec<u8>> {
            let bytes = body::to_bytes(self.0.into_body())
                .await
                .map_err(TransportError::from)?;

            Ok(bytes.to_vec())
        }
    }

    impl TryFrom<Request> for hyper::Request<Body> {
        type Error = http::Error;

        fn try_from(request: Request) -> std::result::Result<Self, Self::Error> {
            let mut builder = hyper::Request::get(request.uri);

            for (key, value) in request.headers {
                builder = builder.header(key, value);
            }

            builder.body(Body::empty())
        }
    }
}

#[cfg(target_family = "wasm")]
mod wasm {
    use super::{Request, Response, TransportError};
    use crate::Result;

    use http::StatusCode;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct InnerClient;

    impl InnerClient {
        pub async fn send(&self, request: Request) -> Result<Response> {
            let mut req = reqwasm::http::Request::get(&request.uri);

            for (key, value) in &request.headers {
                req = req.header(key, value);
            }

            let resp = req.send().await.map_err(TransportError::from)?;

            Ok(Response {
                inner: InnerResponse(resp),
            })
        }
    }

    #[derive(Debug)]
    pub struct InnerResponse(reqwasm::http::Response);

    impl InnerResponse {
        pub fn status(&self) -> StatusCode {
            // The fetch API reports `0` for opaque responses.
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::BAD_GATEWAY)
        }

        pub async fn bytes(self) -> Result<Vec<u8>> {
            let text = self.0.text().await.map_err(TransportError::from)?;

            Ok(text.into_bytes())
        }
    }
}
