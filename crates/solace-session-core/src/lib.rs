//! # solace-session-core
//!
//! Session service factories for the Solace connector.
//!
//! A pipeline describes how to reach the broker with a factory, a plain
//! serializable record. The framework binds the factory to a queue (read
//! path) or picks a submission mode (write path), ships it to the workers,
//! and each worker asks it for as many sessions as it needs.
//!
//! ## Key Concepts
//!
//! - **Factory**: value-comparable configuration implementing [`SessionServiceFactory`]
//! - **Queue**: the destination a factory is bound to, at most once
//! - **SubmissionMode**: how producers hand messages to the broker
//! - **SessionService**: the handle produced by `create()`, owned by its caller

pub mod config;
pub mod destination;
pub mod factory;
pub mod paths;
pub mod service;
pub mod submission;

#[cfg(test)]
mod test_env;

// Re-export commonly used types
pub use destination::{BindingError, Queue};
pub use factory::{
    BasicAuthSessionServiceFactory, FactoryRecord, FactorySettings, SessionServiceFactory,
};
pub use service::{SessionError, SessionId, SessionService, SessionState};
pub use submission::SubmissionMode;
