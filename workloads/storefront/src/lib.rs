//! FRAGRANCE. storefront workload.
//!
//! Serves the single storefront page with shell-first streaming SSR:
//! - Shell and static sections flush before the catalog request settles
//! - The catalog is fetched through Spin outbound HTTP, once per request
//! - The settled catalog replaces the loading placeholder in the same response
//!
//! Configuration comes from Spin variables (`backend_url`,
//! `catalog_timeout_ms`, `connect_timeout_ms`, `cart_count`, `log_format`,
//! `log_filter`).

mod stream;

pub use stream::stream_page;

use fragrance_core::{
    ConfigError, StorefrontConfig, ENV_BACKEND_URL, ENV_CART_COUNT, ENV_CATALOG_TIMEOUT_MS,
    ENV_CONNECT_TIMEOUT_MS,
};
use fragrance_data::CatalogClient;
use fragrance_observability::{LogConfig, ENV_LOG_FILTER, ENV_LOG_FORMAT};
use fragrance_streaming::StreamingSink;
use fragrance_ui::StorefrontView;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::{http_component, variables};
use tracing::{error, info, warn, Instrument};

/// Storefront page handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    fragrance_observability::init(&log_config());

    if req.method() != Method::Get {
        respond_with_status(response_out, 405);
        return;
    }

    let config = match storefront_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid storefront configuration");
            respond_with_status(response_out, 500);
            return;
        }
    };

    let path = req.path_with_query().unwrap_or_default();
    let mut view = StorefrontView::from_config(&config);
    let span = tracing::info_span!("request", mount = %view.mount_id(), path = %path);

    async move {
        let header_list: Vec<(String, Vec<u8>)> = vec![
            ("content-type".to_owned(), "text/html; charset=utf-8".into()),
            ("cache-control".to_owned(), "no-store".into()),
            ("x-mount-id".to_owned(), view.mount_id().to_string().into()),
        ];
        let headers = match Fields::from_list(&header_list) {
            Ok(headers) => headers,
            Err(e) => {
                error!(error = ?e, "invalid response headers");
                respond_with_status(response_out, 500);
                return;
            }
        };

        let response = OutgoingResponse::new(headers);
        if response.set_status_code(200).is_err() {
            warn!("failed to set status code");
        }
        let body = response.take_body();
        response_out.set(response);

        let mut sink = StreamingSink::new(body);
        let catalog = CatalogClient::spin(&config);
        info!(catalog_url = %catalog.catalog_url(), "streaming storefront");

        let load = view.mount(catalog);
        if let Err(e) = stream_page(&mut sink, &mut view, load).await {
            // Headers are already out; the client sees a truncated document.
            warn!(error = %e, phase = ?sink.phase(), "stream aborted");
        }
    }
    .instrument(span)
    .await;
}

fn respond_with_status(response_out: ResponseOutparam, status: u16) {
    let response = OutgoingResponse::new(Fields::new());
    if response.set_status_code(status).is_err() {
        warn!(status, "failed to set status code");
    }
    response_out.set(response);
}

/// Spin variable name for one of the storefront's setting keys.
fn spin_variable_name(key: &str) -> Option<&'static str> {
    match key {
        ENV_BACKEND_URL => Some("backend_url"),
        ENV_CATALOG_TIMEOUT_MS => Some("catalog_timeout_ms"),
        ENV_CONNECT_TIMEOUT_MS => Some("connect_timeout_ms"),
        ENV_CART_COUNT => Some("cart_count"),
        ENV_LOG_FORMAT => Some("log_format"),
        ENV_LOG_FILTER => Some("log_filter"),
        _ => None,
    }
}

fn spin_variable(key: &str) -> Option<String> {
    let name = spin_variable_name(key)?;
    variables::get(name).ok().filter(|value| !value.is_empty())
}

fn storefront_config() -> Result<StorefrontConfig, ConfigError> {
    StorefrontConfig::default().with_overrides(spin_variable)
}

fn log_config() -> LogConfig {
    LogConfig::default()
        .with_overrides(spin_variable)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Variable Mapping Tests ===

    #[test]
    fn test_spin_variable_name_covers_settings() {
        assert_eq!(spin_variable_name(ENV_BACKEND_URL), Some("backend_url"));
        assert_eq!(spin_variable_name(ENV_CATALOG_TIMEOUT_MS), Some("catalog_timeout_ms"));
        assert_eq!(spin_variable_name(ENV_CONNECT_TIMEOUT_MS), Some("connect_timeout_ms"));
        assert_eq!(spin_variable_name(ENV_CART_COUNT), Some("cart_count"));
        assert_eq!(spin_variable_name(ENV_LOG_FORMAT), Some("log_format"));
        assert_eq!(spin_variable_name(ENV_LOG_FILTER), Some("log_filter"));
    }

    #[test]
    fn test_spin_variable_name_unknown_key() {
        assert_eq!(spin_variable_name("FRAGRANCE_NOPE"), None);
        assert_eq!(spin_variable_name("backend_url"), None);
    }

    #[test]
    fn test_spin_variables_declared_in_manifest() {
        let manifest = include_str!("../spin.toml");
        for key in [
            ENV_BACKEND_URL,
            ENV_CATALOG_TIMEOUT_MS,
            ENV_CONNECT_TIMEOUT_MS,
            ENV_CART_COUNT,
            ENV_LOG_FORMAT,
            ENV_LOG_FILTER,
        ] {
            let name = spin_variable_name(key).unwrap();
            assert!(
                manifest.contains(&format!("{} = \"{{{{ {} }}}}\"", name, name)),
                "{} not wired into the component",
                name
            );
        }
    }
}
