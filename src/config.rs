//! API Configuration
//!
//! Where the orders API lives. Defaults match the service layout; the host
//! page may override the API base with
//! `<meta name="orders-api-base" content="/some/prefix">`.

use leptos::logging::log;

/// Default prefix of every REST endpoint.
pub const DEFAULT_API_BASE: &str = "/api";

/// Health check, served outside the API prefix.
pub const DEFAULT_HEALTH_PATH: &str = "/health";

const API_BASE_META: &str = "meta[name=\"orders-api-base\"]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub health_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base(&base_url.into()),
            ..Default::default()
        }
    }

    /// Read overrides from the host document, falling back to defaults.
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(API_BASE_META).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|content| !content.trim().is_empty());

        match base {
            Some(base) => {
                log!("[Config] API base overridden: {}", base);
                Self::with_base_url(base)
            }
            None => Self::default(),
        }
    }

    /// Full URL of an API path such as `/orders/7`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/orders"), "/api/orders");
        assert_eq!(config.health_path, "/health");
    }

    #[test]
    fn test_override_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("http://localhost:8080/api/ ");
        assert_eq!(config.url("/orders/1"), "http://localhost:8080/api/orders/1");
    }
}
