//! Base-URL aware fetch client.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{FetchError, HttpTransport};

/// JSON client bound to one backend base URL.
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Clone)]
pub struct FetchClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl FetchClient {
    /// Create a same-origin client over the given transport.
    pub fn new(transport: impl HttpTransport + 'static) -> Self {
        Self::from_shared(Rc::new(transport))
    }

    pub fn from_shared(transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: String::new(),
            transport,
        }
    }

    /// Set the base URL for relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), path)
        }
    }

    /// GET a path and decode the JSON body. Non-2xx responses are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.url_for(path);
        debug!(url = %url, "fetching");

        let response = self.transport.get(&url).await?;
        debug!(url = %url, status = response.status, bytes = response.body.len(), "fetched");

        response.error_for_status(&url)?.json()
    }
}

impl fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Response;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Returns a canned response and records requested URLs.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        seen: RefCell<Vec<String>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Rc<Self> {
            Rc::new(Self {
                status,
                body,
                seen: RefCell::new(Vec::new()),
            })
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for CannedTransport {
        async fn get(&self, url: &str) -> Result<Response, FetchError> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(Response::new(self.status, self.body.as_bytes().to_vec()))
        }
    }

    #[test]
    fn test_url_for_same_origin() {
        let client = FetchClient::new(Unreachable);
        assert_eq!(client.url_for("/api/products"), "/api/products");
    }

    #[test]
    fn test_url_for_with_base() {
        let client = FetchClient::new(Unreachable).with_base_url("http://localhost:8000/");
        assert_eq!(
            client.url_for("/api/products"),
            "http://localhost:8000/api/products"
        );
    }

    #[test]
    fn test_url_for_absolute_passthrough() {
        let client = FetchClient::new(Unreachable).with_base_url("http://a");
        assert_eq!(client.url_for("https://b/x"), "https://b/x");
    }

    #[test]
    fn test_get_json_uses_resolved_url() {
        let transport = CannedTransport::new(200, "[1,2]");
        let client = FetchClient::from_shared(transport.clone()).with_base_url("http://shop");

        let values: Vec<u8> = futures::executor::block_on(client.get_json("/api/products")).unwrap();

        assert_eq!(values, vec![1, 2]);
        assert_eq!(*transport.seen.borrow(), vec!["http://shop/api/products"]);
    }

    #[test]
    fn test_get_json_error_status() {
        let client = FetchClient::from_shared(CannedTransport::new(404, "not found"));
        let result: Result<Vec<u8>, _> = futures::executor::block_on(client.get_json("/api/products"));

        assert_eq!(
            result.unwrap_err(),
            FetchError::HttpError {
                status: 404,
                url: "/api/products".to_string()
            }
        );
    }

    #[test]
    fn test_get_json_parse_error() {
        let client = FetchClient::from_shared(CannedTransport::new(200, "{oops"));
        let result: Result<Vec<u8>, _> = futures::executor::block_on(client.get_json("/api/products"));

        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    struct Unreachable;

    #[async_trait(?Send)]
    impl HttpTransport for Unreachable {
        async fn get(&self, _url: &str) -> Result<Response, FetchError> {
            Err(FetchError::RequestError("unused".to_string()))
        }
    }
}
