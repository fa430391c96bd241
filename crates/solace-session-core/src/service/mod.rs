//! Session services produced by factories.
//!
//! A session service is the handle a worker uses to talk to the broker. Each
//! call to a factory's `create()` yields a fresh service owned entirely by the
//! caller; nothing here is pooled or shared between workers.

mod basic_auth;
mod properties;

pub use basic_auth::BasicAuthSessionService;
pub use properties::{RetryPolicy, SessionProperties};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a created session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a session service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Created,
    Connected,
    Closed,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionState::Created => "created",
            SessionState::Connected => "connected",
            SessionState::Closed => "closed",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    #[error("Session is closed: {0}")]
    Closed(SessionId),

    #[error("Failed to connect session: {0}")]
    ConnectFailed(String),
}

/// A live (or openable) broker session.
///
/// Implementations are `Send` so a worker can move the service onto the
/// thread that uses it. They are not required to be `Sync`.
pub trait SessionService: Send + std::fmt::Debug {
    fn id(&self) -> &SessionId;

    fn state(&self) -> SessionState;

    /// Properties resolved by the factory when this session was created.
    fn properties(&self) -> &SessionProperties;

    /// Open the session. Connecting an already connected session is a no-op.
    fn connect(&mut self) -> Result<(), SessionError>;

    /// Close the session. Idempotent.
    fn close(&mut self);

    fn is_closed(&self) -> bool {
        self.state() == SessionState::Closed
    }
}
