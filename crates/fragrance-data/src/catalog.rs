//! Catalog source: fetches the product list from `GET {base}/api/products`.

use std::time::Duration;

use async_trait::async_trait;
use fragrance_core::{Product, StorefrontConfig, CATALOG_PATH};
use thiserror::Error;

use crate::{FetchClient, FetchError, HttpTransport};

/// Why the catalog could not be loaded.
///
/// Every variant renders with the user-facing "Failed to load products"
/// prefix, so `to_string()` is suitable for the error indicator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Network failure, refused connection or unusable URL.
    #[error("Failed to load products: {0}")]
    Transport(String),

    #[error("Failed to load products: request timed out after {0:?}")]
    Timeout(Duration),

    /// The backend answered with a non-2xx status.
    #[error("Failed to load products (HTTP {0})")]
    Status(u16),

    /// The body was not a JSON array of products.
    #[error("Failed to load products: invalid catalog data ({0})")]
    Parse(String),
}

impl From<FetchError> for CatalogError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::RequestError(msg) | FetchError::InvalidUrl(msg) => {
                CatalogError::Transport(msg)
            }
            FetchError::Timeout(after) => CatalogError::Timeout(after),
            FetchError::HttpError { status, .. } => CatalogError::Status(status),
            FetchError::ParseError(msg) => CatalogError::Parse(msg),
        }
    }
}

/// Anything that can produce the product catalog.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError>;
}

/// HTTP catalog source.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: FetchClient,
}

impl CatalogClient {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Build a client for the configured backend over a given transport.
    pub fn from_config(config: &StorefrontConfig, transport: impl HttpTransport + 'static) -> Self {
        Self::new(FetchClient::new(transport).with_base_url(config.base_url.clone()))
    }

    /// Build a reqwest-backed client honouring the configured timeouts.
    #[cfg(feature = "native")]
    pub fn native(config: &StorefrontConfig) -> Result<Self, FetchError> {
        let transport = crate::ReqwestTransport::new(crate::TimeoutConfig::from_config(config))?;
        Ok(Self::from_config(config, transport))
    }

    /// Build a client over the Spin host's outbound HTTP, with the configured
    /// timeouts passed to the host.
    #[cfg(feature = "spin")]
    pub fn spin(config: &StorefrontConfig) -> Self {
        let transport = crate::SpinTransport::new(crate::TimeoutConfig::from_config(config));
        Self::from_config(config, transport)
    }

    pub fn catalog_url(&self) -> String {
        self.client.url_for(CATALOG_PATH)
    }
}

#[async_trait(?Send)]
impl CatalogSource for CatalogClient {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self.client.get_json(CATALOG_PATH).await?;
        Ok(products)
    }
}

/// A fixed catalog, for offline rendering and tests.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    result: Result<Vec<Product>, CatalogError>,
}

impl StaticCatalog {
    pub fn ready(products: Vec<Product>) -> Self {
        Self {
            result: Ok(products),
        }
    }

    pub fn failing(error: CatalogError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, CatalogError> {
        self.result.clone()
    }
}


#[cfg(all(test, feature = "native"))]
mod http_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn client_for(base_url: &str) -> CatalogClient {
        CatalogClient::native(&StorefrontConfig::new(base_url)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_catalog_success() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Neroli", "description": "Bright citrus.", "price": 42, "image": "n.jpg"},
            {"title": "Vetiver", "price": 58.5}
        ])))
        .await;

        let products = client_for(&server.uri()).fetch_catalog().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Neroli");
        assert_eq!(products[0].price.display(), "$42.00");
        assert_eq!(products[0].image.as_deref(), Some("n.jpg"));
        assert_eq!(products[1].description, "");
        assert!(products[1].id.is_none());
    }

    #[tokio::test]
    async fn test_fetch_catalog_empty_array() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([]))).await;
        let products = client_for(&server.uri()).fetch_catalog().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_catalog_server_error() {
        let server = serve(ResponseTemplate::new(500)).await;
        let err = client_for(&server.uri()).fetch_catalog().await.unwrap_err();
        assert_eq!(err, CatalogError::Status(500));
    }

    #[tokio::test]
    async fn test_fetch_catalog_malformed_body() {
        let server = serve(ResponseTemplate::new(200).set_body_string("<html>")).await;
        let err = client_for(&server.uri()).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_not_an_array() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!({"products": []}))).await;
        let err = client_for(&server.uri()).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_missing_price() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([{"title": "Iris"}]))).await;
        let err = client_for(&server.uri()).fetch_catalog().await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_null_description_is_ready() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Neroli", "price": 42, "image": "x.jpg", "description": null}
        ])))
        .await;

        let products = client_for(&server.uri()).fetch_catalog().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Neroli");
        assert_eq!(products[0].description, "");
    }

    #[tokio::test]
    async fn test_fetch_catalog_missing_title_is_ready() {
        let server = serve(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "price": 42},
            {"id": 2, "title": "Oud", "price": 9}
        ])))
        .await;

        let client = client_for(&server.uri());
        let mut loader = crate::ProductLoader::new();
        let state = loader.load(&client).await;

        assert!(state.is_ready());
        assert_eq!(state.products().len(), 2);
        assert_eq!(state.products()[0].title, "");
        assert_eq!(state.products()[1].title, "Oud");
    }

    #[tokio::test]
    async fn test_fetch_catalog_connection_refused() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let err = client_for(&format!("http://127.0.0.1:{}", port))
            .fetch_catalog()
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[test]
    fn test_catalog_url_from_config() {
        let client = client_for("http://localhost:8000/");
        assert_eq!(client.catalog_url(), "http://localhost:8000/api/products");
    }
}
