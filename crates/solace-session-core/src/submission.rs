//! Write submission modes.
//!
//! The submission mode is chosen by the write connector when it builds its
//! writers and decides how producers hand messages to the broker. It has no
//! meaning on the read path, which is why factories hold it as optional.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Strategy used to hand outbound messages to the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionMode {
    /// Non-blocking submission: acknowledgement callbacks run on the I/O
    /// reactor thread and a wide publish window is kept open.
    HigherThroughput,
    /// Blocking hand-off: callbacks are dispatched on their own thread and
    /// the publish window is kept narrow.
    LowerLatency,
    /// Leave producer properties exactly as the session implementation sets them.
    Custom,
    /// Used by test pipelines; no producer tuning.
    Testing,
}

/// Producer properties derived from a submission mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProducerTuning {
    pub callback_on_reactor: bool,
    pub ack_window_size: u8,
}

impl SubmissionMode {
    pub const ALL: [SubmissionMode; 4] = [
        SubmissionMode::HigherThroughput,
        SubmissionMode::LowerLatency,
        SubmissionMode::Custom,
        SubmissionMode::Testing,
    ];

    /// Producer tuning for this mode, or `None` when the mode leaves the
    /// session's own properties untouched.
    pub fn producer_tuning(self) -> Option<ProducerTuning> {
        match self {
            SubmissionMode::HigherThroughput => Some(ProducerTuning {
                callback_on_reactor: true,
                ack_window_size: 255,
            }),
            SubmissionMode::LowerLatency => Some(ProducerTuning {
                callback_on_reactor: false,
                ack_window_size: 50,
            }),
            SubmissionMode::Custom | SubmissionMode::Testing => None,
        }
    }

    pub fn is_tuned(self) -> bool {
        self.producer_tuning().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SubmissionMode::HigherThroughput => "HIGHER_THROUGHPUT",
            SubmissionMode::LowerLatency => "LOWER_LATENCY",
            SubmissionMode::Custom => "CUSTOM",
            SubmissionMode::Testing => "TESTING",
        }
    }
}

impl std::fmt::Display for SubmissionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown submission mode: {0}")]
pub struct ParseSubmissionModeError(pub String);

impl FromStr for SubmissionMode {
    type Err = ParseSubmissionModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        SubmissionMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ParseSubmissionModeError(s.to_string()))
    }
}
