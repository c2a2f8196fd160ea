use async_trait::async_trait;
use prompt_relay::{Error, Result, forwarder::PromptForwarder};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockOutcome {
    Payload(Value),
    Empty,
    Status(u16),
    Timeout,
}

/// Mock forwarder that records every prompt it receives
#[derive(Debug)]
pub struct MockForwarder {
    pub prompts: Arc<Mutex<Vec<Option<String>>>>,
    outcome: MockOutcome,
}

impl MockForwarder {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            outcome,
        }
    }

    pub fn returning(payload: Value) -> Self {
        Self::new(MockOutcome::Payload(payload))
    }

    pub fn get_prompts(&self) -> Vec<Option<String>> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl PromptForwarder for MockForwarder {
    async fn forward(&self, prompt: Option<&str>) -> Result<Option<Value>> {
        self.prompts
            .lock()
            .unwrap()
            .push(prompt.map(str::to_string));

        match &self.outcome {
            MockOutcome::Payload(value) => Ok(Some(value.clone())),
            MockOutcome::Empty => Ok(None),
            MockOutcome::Status(status) => Err(Error::DownstreamStatus {
                status: *status,
                body: "mock failure".to_string(),
            }),
            MockOutcome::Timeout => Err(Error::Timeout { timeout_ms: 100 }),
        }
    }
}
