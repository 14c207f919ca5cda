//! Pluggable HTTP transports.
//!
//! The catalog is fetched through an [`HttpTransport`] so the same client runs
//! on a native runtime (reqwest) and inside a Spin component (outbound HTTP).

use async_trait::async_trait;

use crate::{FetchError, Response};

/// Issues a single GET request and returns the raw response.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn get(&self, url: &str) -> Result<Response, FetchError>;
}

#[cfg(feature = "native")]
pub use native::ReqwestTransport;

#[cfg(feature = "spin")]
pub use spin::SpinTransport;

#[cfg(feature = "native")]
mod native {
    use super::*;
    use crate::TimeoutConfig;

    /// Transport backed by a pooled reqwest client.
    ///
    /// Both the connect and the total timeout are enforced by the client, so a
    /// hung backend surfaces as [`FetchError::Timeout`].
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
        timeout: TimeoutConfig,
    }

    impl ReqwestTransport {
        pub fn new(timeout: TimeoutConfig) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .connect_timeout(timeout.connect)
                .timeout(timeout.total)
                .build()
                .map_err(|e| FetchError::RequestError(e.to_string()))?;

            Ok(Self { client, timeout })
        }

        pub fn timeout(&self) -> TimeoutConfig {
            self.timeout
        }

        fn map_error(&self, error: reqwest::Error) -> FetchError {
            if error.is_timeout() {
                FetchError::Timeout(self.timeout.total)
            } else if error.is_builder() {
                FetchError::InvalidUrl(error.to_string())
            } else {
                FetchError::RequestError(error.to_string())
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ReqwestTransport {
        async fn get(&self, url: &str) -> Result<Response, FetchError> {
            let response = self
                .client
                .get(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| self.map_error(e))?;

            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(|e| self.map_error(e))?;

            Ok(Response::new(status, body.to_vec()))
        }
    }
}

#[cfg(feature = "spin")]
mod spin {
    use super::*;
    use crate::TimeoutConfig;
    use spin_sdk::http::conversions::{TryFromIncomingResponse, TryIntoOutgoingRequest};
    use spin_sdk::http::Request;
    use spin_sdk::wit::wasi::http0_2_0::outgoing_handler;
    use spin_sdk::wit::wasi::http0_2_0::types::{ErrorCode, RequestOptions};
    use tracing::warn;

    /// Transport using the Spin host's outbound HTTP.
    ///
    /// The connect timeout and the total timeout (as first-byte and
    /// between-bytes limits) are handed to the host as wasi-http request
    /// options, so a hung backend surfaces as [`FetchError::Timeout`].
    ///
    /// Waiting for the response head blocks the component. Anything that
    /// must reach the client first has to be flushed before the fetch is
    /// driven.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SpinTransport {
        timeout: TimeoutConfig,
    }

    impl SpinTransport {
        pub fn new(timeout: TimeoutConfig) -> Self {
            Self { timeout }
        }

        pub fn timeout(&self) -> TimeoutConfig {
            self.timeout
        }

        fn options(&self) -> RequestOptions {
            let options = RequestOptions::new();
            let total = self.timeout.total_nanos();
            if options
                .set_connect_timeout(Some(self.timeout.connect_nanos()))
                .and_then(|()| options.set_first_byte_timeout(Some(total)))
                .and_then(|()| options.set_between_bytes_timeout(Some(total)))
                .is_err()
            {
                warn!("host refused outbound request timeouts");
            }
            options
        }

        fn map_error(&self, code: ErrorCode) -> FetchError {
            match code {
                ErrorCode::ConnectionTimeout
                | ErrorCode::ConnectionReadTimeout
                | ErrorCode::ConnectionWriteTimeout
                | ErrorCode::HttpResponseTimeout => FetchError::Timeout(self.timeout.total),
                other => FetchError::RequestError(format!("{:?}", other)),
            }
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for SpinTransport {
        async fn get(&self, url: &str) -> Result<Response, FetchError> {
            let request = Request::get(url)
                .header("accept", "application/json")
                .build();
            let (outgoing, _) = request
                .try_into_outgoing_request()
                .map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

            let pending = outgoing_handler::handle(outgoing, Some(self.options()))
                .map_err(|code| self.map_error(code))?;
            let incoming = loop {
                match pending.get() {
                    Some(Ok(Ok(response))) => break response,
                    Some(Ok(Err(code))) => return Err(self.map_error(code)),
                    Some(Err(())) => {
                        return Err(FetchError::RequestError("response already consumed".into()))
                    }
                    None => pending.subscribe().block(),
                }
            };

            let response = spin_sdk::http::Response::try_from_incoming_response(incoming)
                .await
                .map_err(|e| FetchError::RequestError(e.to_string()))?;

            Ok(Response::new(*response.status(), response.into_body()))
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::TimeoutConfig;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(total: Duration) -> ReqwestTransport {
        ReqwestTransport::new(TimeoutConfig::from_total(total)).unwrap()
    }

    #[tokio::test]
    async fn test_reqwest_transport_returns_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server)
            .await;

        let response = transport(Duration::from_secs(5))
            .get(&format!("{}/api/products", server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"[]");
    }

    #[tokio::test]
    async fn test_reqwest_transport_passes_error_status_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let response = transport(Duration::from_secs(5))
            .get(&format!("{}/api/products", server.uri()))
            .await
            .unwrap();

        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_reqwest_transport_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let err = transport(Duration::from_millis(100))
            .get(&format!("{}/api/products", server.uri()))
            .await
            .unwrap_err();

        assert_eq!(err, FetchError::Timeout(Duration::from_millis(100)));
    }

    #[tokio::test]
    async fn test_reqwest_transport_invalid_url() {
        let err = transport(Duration::from_secs(1))
            .get("/api/products")
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
