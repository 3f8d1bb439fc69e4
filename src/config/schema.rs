//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files, and
//! every field has a default so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener and request handling.
    pub server: ServerConfig,

    /// Generated stylesheet output.
    pub styles: StylesConfig,

    /// Static file serving.
    pub static_files: StaticFilesConfig,

    /// Logging and metrics.
    pub observability: ObservabilityConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5005").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5005".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Generated CSS configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StylesConfig {
    /// Directory the per-page stylesheets are written to. Also the URL
    /// segment they are linked under.
    pub dir: String,

    /// Write stylesheets during startup.
    pub generate_on_startup: bool,
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            dir: "styles".to_string(),
            generate_on_startup: true,
        }
    }
}

/// Static file configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory static paths are resolved against.
    pub root: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self { root: ".".to_string() }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` overrides it.
    pub log_filter: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "layoutml=debug,tower_http=debug".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
