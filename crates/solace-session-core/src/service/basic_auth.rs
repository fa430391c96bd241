//! Session service for username/password authentication.

use chrono::{DateTime, Utc};

use super::{SessionError, SessionId, SessionProperties, SessionService, SessionState};

/// Session handed out by [`crate::factory::BasicAuthSessionServiceFactory`].
///
/// Tracks its own lifecycle and carries the resolved connection properties.
/// The wire client that opens the actual broker connection is attached by the
/// connector runtime and is not part of this crate.
pub struct BasicAuthSessionService {
    id: SessionId,
    properties: SessionProperties,
    password: String,
    state: SessionState,
    created_at: DateTime<Utc>,
    connected_at: Option<DateTime<Utc>>,
}

impl BasicAuthSessionService {
    pub(crate) fn new(id: SessionId, properties: SessionProperties, password: String) -> Self {
        Self {
            id,
            properties,
            password,
            state: SessionState::Created,
            created_at: Utc::now(),
            connected_at: None,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn connected_at(&self) -> Option<DateTime<Utc>> {
        self.connected_at
    }

    fn validate(&self) -> Result<(), SessionError> {
        if self.properties.host.is_empty() {
            return Err(SessionError::ConnectFailed("host is empty".to_string()));
        }
        if self.properties.username.is_empty() || self.password.is_empty() {
            return Err(SessionError::ConnectFailed(
                "missing credentials".to_string(),
            ));
        }
        Ok(())
    }
}

impl SessionService for BasicAuthSessionService {
    fn id(&self) -> &SessionId {
        &self.id
    }

    fn state(&self) -> SessionState {
        self.state
    }

    fn properties(&self) -> &SessionProperties {
        &self.properties
    }

    fn connect(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Connected => return Ok(()),
            SessionState::Closed => return Err(SessionError::Closed(self.id.clone())),
            SessionState::Created => {}
        }

        self.validate()?;
        self.state = SessionState::Connected;
        self.connected_at = Some(Utc::now());
        log::info!(
            "Session {} connected to {} (vpn {}, client {})",
            self.id,
            self.properties.host,
            self.properties.vpn_name,
            self.properties.client_name
        );
        Ok(())
    }

    fn close(&mut self) {
        if self.state == SessionState::Closed {
            return;
        }
        self.state = SessionState::Closed;
        log::info!("Session {} closed", self.id);
    }
}

impl std::fmt::Debug for BasicAuthSessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthSessionService")
            .field("id", &self.id)
            .field("properties", &self.properties)
            .field("password", &"<redacted>")
            .field("state", &self.state)
            .field("created_at", &self.created_at)
            .field("connected_at", &self.connected_at)
            .finish()
    }
}
