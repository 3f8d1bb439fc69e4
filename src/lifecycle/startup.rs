//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Start the metrics endpoint when enabled
//! - Generate stylesheets before any request is accepted
//! - Bind the listener last
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Steps run in order, not concurrently

use std::net::SocketAddr;
use std::path::Path;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_config, AppConfig, ConfigError};
use crate::http::{App, StylesheetError};
use crate::observability;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Stylesheet generation failed: {0}")]
    Stylesheets(#[from] StylesheetError),

    #[error("Metrics endpoint failed: {0}")]
    Metrics(#[from] BuildError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Config from `path`, or defaults when no path is given.
///
/// Runs before logging is initialised, so it does not log.
pub fn load(path: Option<&Path>) -> Result<AppConfig, StartupError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(AppConfig::default()),
    }
}

/// Start the Prometheus endpoint if the config asks for it.
pub fn start_metrics(config: &AppConfig) -> Result<(), StartupError> {
    if !config.observability.metrics_enabled {
        return Ok(());
    }
    // Validation has already checked the address.
    match config.observability.metrics_address.parse::<SocketAddr>() {
        Ok(addr) => observability::init_metrics(addr)?,
        Err(_) => tracing::error!(
            metrics_address = %config.observability.metrics_address,
            "Failed to parse metrics address"
        ),
    }
    Ok(())
}

/// Prepare the app for serving: stylesheets, then the route log.
pub async fn prepare(app: &mut App, config: &AppConfig) -> Result<(), StartupError> {
    if config.styles.generate_on_startup {
        let written = app.generate_stylesheets().await?;
        tracing::info!(
            count = written,
            dir = %app.styles_path().display(),
            "Stylesheets generated"
        );
    }

    for route in app.route_table() {
        tracing::info!(
            path = %route.path,
            parameterized = route.parameterized,
            is_async = route.is_async,
            "Route"
        );
    }
    Ok(())
}

pub async fn bind(config: &AppConfig) -> Result<TcpListener, StartupError> {
    let address = &config.server.bind_address;
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;

    #[test]
    fn test_load_defaults_without_path() {
        assert_eq!(load(None).unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn test_prepare_respects_generate_flag() {
        let root = std::env::temp_dir().join(format!("layoutml-startup-{}", uuid::Uuid::new_v4()));
        let mut config = AppConfig::default();
        config.static_files.root = root.display().to_string();
        config.styles.generate_on_startup = false;

        let mut app = App::from_config(&config);
        app.route("/", |_| Page::new("Home"));
        prepare(&mut app, &config).await.unwrap();
        assert_eq!(app.stylesheet_link("/"), None);
        assert!(!root.exists());

        config.styles.generate_on_startup = true;
        prepare(&mut app, &config).await.unwrap();
        assert_eq!(app.stylesheet_link("/"), Some("/styles/Page.css"));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = AppConfig::default();
        config.server.bind_address = taken.local_addr().unwrap().to_string();
        assert!(matches!(bind(&config).await, Err(StartupError::Bind { .. })));
    }
}
