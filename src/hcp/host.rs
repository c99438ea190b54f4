//! Host resolution from multiple sources

use log::debug;

use crate::config::{defaults, host as host_config};

/// Host resolution with fallback logic
pub struct HostResolver;

impl HostResolver {
    /// Resolve host from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variable (TFE_HOSTNAME)
    /// 3. Default host (app.terraform.io)
    ///
    /// The result is a bare hostname: scheme and trailing slashes are stripped.
    pub fn resolve(cli_host: Option<&str>) -> String {
        if let Some(host) = cli_host.filter(|h| !h.is_empty()) {
            debug!("Using host from CLI argument: {}", host);
            return Self::normalize(host);
        }

        if let Ok(host) = std::env::var(host_config::ENV_VAR) {
            if !host.is_empty() {
                debug!(
                    "Using host from {} environment variable: {}",
                    host_config::ENV_VAR,
                    host
                );
                return Self::normalize(&host);
            }
        }

        debug!("Using default host: {}", defaults::HOST);
        defaults::HOST.to_string()
    }

    /// Strip scheme and trailing slashes from a host
    pub fn normalize(host: &str) -> String {
        host.trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string()
    }
}
