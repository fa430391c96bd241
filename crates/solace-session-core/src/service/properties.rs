//! Connection properties resolved at `create()` time.

use serde::{Deserialize, Serialize};

use crate::destination::Queue;
use crate::submission::SubmissionMode;

/// Connection retry settings carried by a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryPolicy {
    pub connect_retries: u32,
    pub reconnect_retries: u32,
    pub reconnect_retry_wait_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            connect_retries: 3,
            reconnect_retries: 3,
            reconnect_retry_wait_ms: 3000,
        }
    }
}

/// Plain record of everything a session needs to open its connection.
///
/// Built by the factory from its own configuration plus the bound queue and
/// submission mode, so two sessions created from equal factories carry equal
/// properties apart from the client name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionProperties {
    pub host: String,
    pub vpn_name: String,
    pub username: String,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue: Option<Queue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_mode: Option<SubmissionMode>,
    pub callback_on_reactor: bool,
    pub ack_window_size: u8,
    pub retry: RetryPolicy,
}

impl SessionProperties {
    pub const DEFAULT_ACK_WINDOW_SIZE: u8 = 255;

    pub fn new(
        host: impl Into<String>,
        vpn_name: impl Into<String>,
        username: impl Into<String>,
        client_name: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            vpn_name: vpn_name.into(),
            username: username.into(),
            client_name: client_name.into(),
            queue: None,
            submission_mode: None,
            callback_on_reactor: false,
            ack_window_size: Self::DEFAULT_ACK_WINDOW_SIZE,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_queue(mut self, queue: Option<Queue>) -> Self {
        self.queue = queue;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Record the submission mode and apply its producer tuning, if any.
    pub fn with_submission_mode(mut self, mode: Option<SubmissionMode>) -> Self {
        self.submission_mode = mode;
        if let Some(tuning) = mode.and_then(SubmissionMode::producer_tuning) {
            self.callback_on_reactor = tuning.callback_on_reactor;
            self.ack_window_size = tuning.ack_window_size;
        }
        self
    }
}
