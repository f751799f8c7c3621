//! Client configuration: backend endpoints and UI timings.
//!
//! Defaults match the order-management backend. A page may override any
//! subset of them with a JSON document in
//! `<meta name="client-config" content='{"timing":{"refresh_interval_ms":10000}}'>`.

use anyhow::Context;
use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::browser;

const CONFIG_META_NAME: &str = "client-config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub timing: Timing,
}

/// Same-origin paths of the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub orders: String,
    pub complete: String,
    pub delete: String,
    pub upload: String,
    pub uploads: String,
    pub login: String,
    pub logout: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            orders: "/orders".to_string(),
            complete: "/complete".to_string(),
            delete: "/delete".to_string(),
            upload: "/upload".to_string(),
            uploads: "/uploads".to_string(),
            login: "/login".to_string(),
            logout: "/logout".to_string(),
        }
    }
}

impl Endpoints {
    pub fn complete_url(&self, position: usize) -> String {
        format!("{}/{}", self.complete, position)
    }

    pub fn delete_url(&self, position: usize) -> String {
        format!("{}/{}", self.delete, position)
    }

    /// Download link of a stored upload.
    pub fn stored_file_url(&self, stored: &str) -> String {
        format!("{}/{}", self.uploads, urlencoding::encode(stored))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub refresh_interval_ms: u32,
    pub counter_steps: u32,
    pub counter_frame_ms: u32,
    pub banner_timeout_ms: u32,
    pub clock_interval_ms: u32,
    pub reveal_stagger_ms: u32,
    pub ripple_ms: u32,
    pub loading_screen_ms: u32,
    pub loading_fade_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 30_000,
            counter_steps: 20,
            counter_frame_ms: 50,
            banner_timeout_ms: 5_000,
            clock_interval_ms: 60_000,
            reveal_stagger_ms: 100,
            ripple_ms: 600,
            loading_screen_ms: 1_500,
            loading_fade_ms: 500,
            swipe_threshold_px: 50.0,
        }
    }
}

/// Parse a (possibly partial) JSON override on top of the defaults.
pub fn parse_config(json: &str) -> anyhow::Result<ClientConfig> {
    serde_json::from_str(json).context("client config is not valid JSON")
}

/// Load configuration for the current page.
///
/// Search order:
/// 1. `<meta name="client-config">` in the served HTML
/// 2. Falls back to built-in defaults
pub fn load_config() -> anyhow::Result<ClientConfig> {
    match browser::meta_content(CONFIG_META_NAME) {
        Some(json) => {
            log::info!("Loading client config from <meta name=\"{}\">", CONFIG_META_NAME);
            parse_config(&json)
        }
        None => {
            log::debug!("Using default client configuration");
            Ok(ClientConfig::default())
        }
    }
}

/// Hook to read the client config provided by `App`.
pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>().expect("ClientConfig not found. Provide it in App.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoints.orders, "/orders");
        assert_eq!(config.timing.refresh_interval_ms, 30_000);
        assert_eq!(config.timing.counter_steps, 20);
        assert_eq!(config.timing.counter_frame_ms, 50);
        assert_eq!(config.timing.banner_timeout_ms, 5_000);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config =
            parse_config(r#"{"timing":{"refresh_interval_ms":10000},"endpoints":{"login":"/signin"}}"#)
                .unwrap();
        assert_eq!(config.timing.refresh_interval_ms, 10_000);
        assert_eq!(config.timing.counter_steps, 20);
        assert_eq!(config.endpoints.login, "/signin");
        assert_eq!(config.endpoints.orders, "/orders");
    }

    #[test]
    fn test_invalid_override() {
        assert!(parse_config("{not json").is_err());
    }

    #[test]
    fn test_action_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.complete_url(0), "/complete/0");
        assert_eq!(endpoints.delete_url(12), "/delete/12");
        assert_eq!(
            endpoints.stored_file_url("20240315-my file.pdf"),
            "/uploads/20240315-my%20file.pdf"
        );
    }
}
