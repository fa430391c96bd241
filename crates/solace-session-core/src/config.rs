//! Factory record files.
//!
//! A factory record is stored as pretty-printed JSON, by default at
//! `~/.config/solace-session/factory.json`:
//!
//! ```json
//! {
//!   "type": "basic_auth",
//!   "host": "tcp://broker:55555",
//!   "username": "writer",
//!   "password": "",
//!   "vpnName": "default",
//!   "retry": { "connectRetries": 3, "reconnectRetries": 3, "reconnectRetryWaitMs": 3000 },
//!   "settings": { "queue": "orders", "submissionMode": "HIGHER_THROUGHPUT" }
//! }
//! ```
//!
//! Secrets can be kept out of the file: `SOLACE_SESSION_PASSWORD` replaces
//! the stored password after loading.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::factory::FactoryRecord;

pub const PASSWORD_ENV_VAR: &str = "SOLACE_SESSION_PASSWORD";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Factory config not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Home directory not set")]
    HomeNotSet,
}

/// Load a factory record from disk.
pub fn load_record(path: &Path) -> Result<FactoryRecord, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let record: FactoryRecord = serde_json::from_str(&contents)?;
    log::debug!("Loaded {} factory from {}", record.kind(), path.display());
    Ok(record)
}

/// Save a factory record to disk.
///
/// Writes to `<path>.tmp` first and renames over the target, so an
/// interrupted save never leaves a truncated record behind.
pub fn save_record(path: &Path, record: &FactoryRecord) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut temp_path = path.as_os_str().to_owned();
    temp_path.push(".tmp");
    let temp_path = PathBuf::from(temp_path);

    let json = serde_json::to_string_pretty(record)?;
    fs::write(&temp_path, json)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Apply environment overrides to a loaded record.
pub fn apply_env_overrides(record: &mut FactoryRecord) {
    apply_password_override(record, std::env::var(PASSWORD_ENV_VAR).ok());
}

fn apply_password_override(record: &mut FactoryRecord, password: Option<String>) {
    match record {
        FactoryRecord::BasicAuth(factory) => {
            if let Some(password) = password.filter(|p| !p.is_empty()) {
                factory.set_password(password);
            }
            if !factory.has_password() {
                log::warn!(
                    "No password configured for {}; set {} or add it to the config file",
                    factory.username(),
                    PASSWORD_ENV_VAR
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::Queue;
    use crate::factory::{BasicAuthSessionServiceFactory, SessionServiceFactory};
    use crate::submission::SubmissionMode;
    use crate::test_env::with_vars;
    use tempfile::tempdir;

    fn create_test_record(password: &str) -> FactoryRecord {
        let mut factory = BasicAuthSessionServiceFactory::builder()
            .host("tcp://broker:55555")
            .username("writer")
            .password(password)
            .build()
            .unwrap();
        factory.set_queue(Queue::new("orders").unwrap()).unwrap();
        factory.set_submission_mode(SubmissionMode::HigherThroughput);
        factory.into()
    }

    #[test]
    fn save_and_load_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factory.json");
        let record = create_test_record("pw");

        save_record(&path, &record).unwrap();
        let loaded = load_record(&path).unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("factory.json");

        save_record(&path, &create_test_record("pw")).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("nested/deeper/factory.json.tmp").exists());
    }

    #[test]
    fn save_overwrites_existing_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factory.json");

        save_record(&path, &create_test_record("old")).unwrap();
        save_record(&path, &create_test_record("new")).unwrap();

        assert_eq!(load_record(&path).unwrap(), create_test_record("new"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        match load_record(&path).unwrap_err() {
            ConfigError::NotFound(p) => assert_eq!(p, path),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_json_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factory.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_record(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn password_override_replaces_stored_password() {
        let mut record = create_test_record("from-file");
        apply_password_override(&mut record, Some("from-env".to_string()));
        assert_eq!(record, create_test_record("from-env"));
    }

    #[test]
    fn empty_password_override_is_ignored() {
        let mut record = create_test_record("from-file");
        apply_password_override(&mut record, Some(String::new()));
        assert_eq!(record, create_test_record("from-file"));

        apply_password_override(&mut record, None);
        assert_eq!(record, create_test_record("from-file"));
    }

    #[test]
    fn env_override_reads_password_variable() {
        let mut record = create_test_record("from-file");
        with_vars(&[(PASSWORD_ENV_VAR, Some("from-env"))], || {
            apply_env_overrides(&mut record);
        });
        assert_eq!(record, create_test_record("from-env"));
    }

    #[test]
    fn env_override_without_variable_keeps_password() {
        let mut record = create_test_record("from-file");
        with_vars(&[(PASSWORD_ENV_VAR, None)], || {
            apply_env_overrides(&mut record);
        });
        assert_eq!(record, create_test_record("from-file"));
    }

    #[test]
    fn not_found_displays_path() {
        let err = ConfigError::NotFound(PathBuf::from("/etc/factory.json"));
        assert!(err.to_string().contains("/etc/factory.json"));
    }
}
