//! Destination binding.
//!
//! A factory is bound to at most one broker queue. The binding is set by the
//! orchestrating framework while the execution graph is constructed and is
//! fixed from then on: once a queue is bound, a request to bind a different
//! one is rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest queue name the broker accepts, in bytes.
pub const MAX_QUEUE_NAME_LEN: usize = 200;

/// Reference to a named broker queue.
///
/// Holds only the name; the factory never owns the queue's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Queue(String);

impl Queue {
    /// Create a queue reference, validating the name.
    pub fn new(name: impl Into<String>) -> Result<Self, BindingError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BindingError::InvalidQueueName {
                name,
                reason: "queue name cannot be empty",
            });
        }
        if name.len() > MAX_QUEUE_NAME_LEN {
            return Err(BindingError::InvalidQueueName {
                name,
                reason: "queue name exceeds 200 bytes",
            });
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err(BindingError::InvalidQueueName {
                name,
                reason: "queue name contains control characters",
            });
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Queue {
    type Error = BindingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Queue> for String {
    fn from(queue: Queue) -> Self {
        queue.0
    }
}

impl std::fmt::Display for Queue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error("Invalid queue name {name:?}: {reason}")]
    InvalidQueueName { name: String, reason: &'static str },

    #[error("Factory already bound to queue {current}, refusing to rebind to {requested}")]
    AlreadyBound { current: Queue, requested: Queue },
}
