//! Runtime configuration, resolved once in `App` and provided via context.

use contracts::shared::polling::PollingPolicy;
use leptos::prelude::*;

pub const LOCAL_API_BASE: &str = "http://localhost:5001/api";
pub const PRODUCTION_API_BASE: &str = "https://laxmipowertech-backend.onrender.com/api";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Refresh policy of the auto-refreshing list pages
    pub poll: PollingPolicy,
}

/// Development hosts: loopback and the office LAN.
pub fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1" || hostname.contains("192.168")
}

/// Picks the API base for the page's host. On development hosts a
/// build-time override wins over the local default.
pub fn resolve_api_base(hostname: &str, override_base: Option<&str>) -> String {
    let base = if is_local_host(hostname) {
        override_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(LOCAL_API_BASE)
    } else {
        PRODUCTION_API_BASE
    };
    base.trim_end_matches('/').to_string()
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        Self {
            api_base_url: resolve_api_base(&hostname, option_env!("API_BASE_URL")),
            poll: PollingPolicy::default(),
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_environment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_local_api() {
        assert_eq!(resolve_api_base("localhost", None), LOCAL_API_BASE);
        assert_eq!(resolve_api_base("127.0.0.1", None), LOCAL_API_BASE);
        assert_eq!(resolve_api_base("192.168.1.20", None), LOCAL_API_BASE);
    }

    #[test]
    fn test_override_applies_only_locally() {
        assert_eq!(
            resolve_api_base("localhost", Some("http://10.0.0.5:5001/api/")),
            "http://10.0.0.5:5001/api"
        );
        assert_eq!(resolve_api_base("localhost", Some("  ")), LOCAL_API_BASE);
        assert_eq!(
            resolve_api_base("app.example.com", Some("http://10.0.0.5:5001/api")),
            PRODUCTION_API_BASE
        );
    }
}
