use axum::Router;
use prompt_relay::{
    Result,
    config::{Config, DownstreamConfig},
    forwarder::{HttpForwarder, PromptForwarder},
    server::{self, handlers::AppState},
};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Build the application router around any forwarder
pub fn create_test_app(forwarder: Arc<dyn PromptForwarder>, reject_missing_input: bool) -> Router {
    let state = AppState {
        forwarder,
        reject_missing_input,
    };
    server::router(state, false)
}

/// Downstream config pointing at the `/q` endpoint of a mock server
pub fn downstream_config(base_uri: &str, timeout_ms: u64) -> DownstreamConfig {
    DownstreamConfig {
        url: format!("{}/q", base_uri),
        timeout_ms,
    }
}

/// Build the application router with a real HTTP forwarder
pub fn create_relay_app(base_uri: &str, reject_missing_input: bool) -> Router {
    let forwarder = HttpForwarder::new(&downstream_config(base_uri, 2_000)).unwrap();
    create_test_app(Arc::new(forwarder), reject_missing_input)
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  cors: true
  reject_missing_input: false
  logs:
    level: "debug"
downstream:
  url: "http://langchain.internal:5000/q"
  timeout_ms: 5000
"#;
