use super::types::OutboundRequest;
use crate::{Error, Result, config::DownstreamConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Sends a prompt to the downstream language-model service.
///
/// `Ok(Some(value))` is a usable result, `Ok(None)` means the downstream
/// answered successfully but with nothing (`null` or an empty body).
#[async_trait]
pub trait PromptForwarder: Send + Sync {
    async fn forward(&self, prompt: Option<&str>) -> Result<Option<Value>>;
}

pub struct HttpForwarder {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpForwarder {
    pub fn new(config: &DownstreamConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        debug!(
            "Created downstream forwarder for {} with {}ms timeout",
            config.url, config.timeout_ms
        );

        Ok(Self {
            client,
            url: config.url.clone(),
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            Error::Transport(err)
        }
    }
}

#[async_trait]
impl PromptForwarder for HttpForwarder {
    async fn forward(&self, prompt: Option<&str>) -> Result<Option<Value>> {
        let body = OutboundRequest::new(prompt);

        debug!(
            "Forwarding prompt to {} (present: {})",
            self.url,
            prompt.is_some()
        );

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        debug!(
            "Downstream responded with status {} ({} bytes)",
            status,
            bytes.len()
        );

        if !status.is_success() {
            return Err(Error::DownstreamStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let value: Value = serde_json::from_slice(&bytes)?;
        if value.is_null() {
            return Ok(None);
        }

        Ok(Some(value))
    }
}
