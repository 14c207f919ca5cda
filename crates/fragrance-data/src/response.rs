//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self, url: &str) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::HttpError {
                status: self.status,
                url: url.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> Response {
        Response::new(status, body.to_vec())
    }

    // === Status Check Tests ===

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(500, b"").is_success());
    }

    // === Body Tests ===

    #[test]
    fn test_response_json_array() {
        let resp = make_response(200, br#"[1, 2, 3]"#);
        let data: Vec<u32> = resp.json().unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_response_json_invalid() {
        let resp = make_response(200, b"<html>oops</html>");
        let result: Result<Vec<u32>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_response_json_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        let result: Result<Vec<u32>, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    // === error_for_status Tests ===

    #[test]
    fn test_response_error_for_status_success() {
        let resp = make_response(200, b"[]");
        assert!(resp.error_for_status("/api/products").is_ok());
    }

    #[test]
    fn test_response_error_for_status_carries_status_and_url() {
        let resp = make_response(503, b"Service Unavailable");
        let err = resp.error_for_status("/api/products").unwrap_err();

        assert_eq!(
            err,
            FetchError::HttpError {
                status: 503,
                url: "/api/products".to_string()
            }
        );
    }
}
