//! Fakes for the client capabilities used by service and scheduler tests

use async_trait::async_trait;
use reviewbot_client::{ClientError, HomeworkSource, MessageSender, Result};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns queued responses in order and records every requested cursor
///
/// Once the queue is drained it keeps answering with an empty batch.
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Result<Value>>>,
    requested: Mutex<Vec<i64>>,
}

impl ScriptedSource {
    pub fn new(responses: impl IntoIterator<Item = Result<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<i64> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch_statuses(&self, from_timestamp: i64) -> Result<Value> {
        self.requested.lock().unwrap().push(from_timestamp);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({"homeworks": []})))
    }
}

/// Records delivered messages; can fail every delivery or a single one
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<String>>,
    failing: bool,
    fail_once_on: Mutex<Option<String>>,
}

impl RecordingSender {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Fails the first message containing `fragment`, then delivers normally
    pub fn failing_once_on(fragment: &str) -> Self {
        Self {
            fail_once_on: Mutex::new(Some(fragment.to_string())),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send_message(&self, text: &str) -> Result<()> {
        if self.failing {
            return Err(ClientError::api_error(502, "Bad Gateway"));
        }
        {
            let mut fail_once_on = self.fail_once_on.lock().unwrap();
            if fail_once_on.as_deref().is_some_and(|f| text.contains(f)) {
                fail_once_on.take();
                return Err(ClientError::api_error(502, "Bad Gateway"));
            }
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
