//! Session service factories.
//!
//! A factory is a plain configuration record that knows how to build a
//! [`SessionService`]. Pipelines construct it on the control process, the
//! framework binds a queue (read path) or a submission mode (write path), and
//! the finished record is serialized and shipped to workers, which call
//! [`SessionServiceFactory::create`] as many times as they need sessions.
//!
//! ```text
//!   control process                         worker process
//!   ───────────────                         ──────────────
//!   builder().build()
//!        │
//!   set_queue / set_submission_mode
//!        │
//!   FactoryRecord::encode ──── JSON ────▶ FactoryRecord::decode
//!                                                │
//!                                           create() ─▶ SessionService
//! ```
//!
//! Implementing a factory for another authentication scheme means holding a
//! [`FactorySettings`] next to the scheme's own fields, deriving value
//! equality and hashing over all of them, and implementing `create()`.

mod basic_auth;
mod record;

pub use basic_auth::{BasicAuthSessionServiceFactory, BasicAuthSessionServiceFactoryBuilder};
pub use record::{FactoryRecord, RecordError};

use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::destination::{BindingError, Queue};
use crate::service::{SessionError, SessionService};
use crate::submission::SubmissionMode;

/// Framework-assigned state shared by every factory.
///
/// Starts unbound with no submission mode. The queue can be bound once; the
/// submission mode can be replaced freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactorySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    queue: Option<Queue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    submission_mode: Option<SubmissionMode>,
}

impl FactorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the queue.
    ///
    /// Binding the queue that is already bound is accepted. Binding a
    /// different queue fails and leaves the current binding in place.
    pub fn bind_queue(&mut self, queue: Queue) -> Result<(), BindingError> {
        match &self.queue {
            Some(current) if *current == queue => Ok(()),
            Some(current) => {
                log::warn!(
                    "Rejected rebinding of factory from queue {} to {}",
                    current,
                    queue
                );
                Err(BindingError::AlreadyBound {
                    current: current.clone(),
                    requested: queue,
                })
            }
            None => {
                log::debug!("Factory bound to queue {}", queue);
                self.queue = Some(queue);
                Ok(())
            }
        }
    }

    pub fn queue(&self) -> Option<&Queue> {
        self.queue.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.queue.is_some()
    }

    pub fn set_submission_mode(&mut self, mode: SubmissionMode) {
        if let Some(previous) = self.submission_mode.replace(mode) {
            if previous != mode {
                log::debug!("Submission mode changed from {} to {}", previous, mode);
            }
        }
    }

    pub fn submission_mode(&self) -> Option<SubmissionMode> {
        self.submission_mode
    }
}

/// Contract for building broker sessions from serializable configuration.
///
/// The supertraits carry the rest of the contract: factories compare and hash
/// by value (the framework deduplicates equal factories), serialize without
/// loss (they cross process boundaries) and hold no live resources (they are
/// `Send + Sync` and `Clone`).
pub trait SessionServiceFactory:
    Clone + Eq + Hash + Serialize + DeserializeOwned + Send + Sync + Debug
{
    type Service: SessionService;

    fn settings(&self) -> &FactorySettings;

    fn settings_mut(&mut self) -> &mut FactorySettings;

    /// Build a new session service from this configuration.
    ///
    /// Every call returns an independent service owned by the caller. The
    /// factory itself is left unchanged.
    fn create(&self) -> Result<Self::Service, SessionError>;

    /// Bind the queue sessions will consume from. See [`FactorySettings::bind_queue`].
    fn set_queue(&mut self, queue: Queue) -> Result<(), BindingError> {
        self.settings_mut().bind_queue(queue)
    }

    fn queue(&self) -> Option<&Queue> {
        self.settings().queue()
    }

    /// Called by the write connector when it builds its writers. Last call wins.
    fn set_submission_mode(&mut self, mode: SubmissionMode) {
        self.settings_mut().set_submission_mode(mode)
    }

    fn submission_mode(&self) -> Option<SubmissionMode> {
        self.settings().submission_mode()
    }
}
