//! Transmittable factory record.
//!
//! Workers do not know which concrete factory a pipeline was built with, so
//! factories travel as a tagged JSON record and are reconstructed on the
//! receiving side:
//!
//! ```json
//! {"type": "basic_auth", "host": "tcp://broker:55555", "username": "...", ...}
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BasicAuthSessionServiceFactory, FactorySettings, SessionServiceFactory};
use crate::service::{SessionError, SessionService};

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to encode factory record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode factory record: {0}")]
    Decode(#[source] serde_json::Error),
}

/// One variant per concrete factory this connector ships.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FactoryRecord {
    BasicAuth(BasicAuthSessionServiceFactory),
}

impl FactoryRecord {
    pub fn kind(&self) -> &'static str {
        match self {
            FactoryRecord::BasicAuth(_) => "basic_auth",
        }
    }

    pub fn settings(&self) -> &FactorySettings {
        match self {
            FactoryRecord::BasicAuth(f) => f.settings(),
        }
    }

    pub fn settings_mut(&mut self) -> &mut FactorySettings {
        match self {
            FactoryRecord::BasicAuth(f) => f.settings_mut(),
        }
    }

    /// Create a session from whichever factory this record holds.
    pub fn create(&self) -> Result<Box<dyn SessionService>, SessionError> {
        match self {
            FactoryRecord::BasicAuth(f) => Ok(Box::new(f.create()?)),
        }
    }

    pub fn encode(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(RecordError::Encode)
    }

    pub fn encode_pretty(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(RecordError::Encode)
    }

    pub fn decode(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(RecordError::Decode)
    }
}

impl From<BasicAuthSessionServiceFactory> for FactoryRecord {
    fn from(factory: BasicAuthSessionServiceFactory) -> Self {
        FactoryRecord::BasicAuth(factory)
    }
}
