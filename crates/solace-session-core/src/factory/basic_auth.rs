//! Factory for sessions that authenticate with a username and password.

use serde::{Deserialize, Serialize};

use super::{FactorySettings, SessionServiceFactory};
use crate::service::{
    BasicAuthSessionService, RetryPolicy, SessionError, SessionId, SessionProperties,
};

const DEFAULT_VPN_NAME: &str = "default";
const CLIENT_NAME_PREFIX: &str = "solace-session";

/// Basic-authentication session factory.
///
/// Construct with [`BasicAuthSessionServiceFactory::builder`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicAuthSessionServiceFactory {
    host: String,
    username: String,
    password: String,
    vpn_name: String,
    #[serde(default)]
    retry: RetryPolicy,
    #[serde(default)]
    settings: FactorySettings,
}

impl BasicAuthSessionServiceFactory {
    pub fn builder() -> BasicAuthSessionServiceFactoryBuilder {
        BasicAuthSessionServiceFactoryBuilder::new()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn vpn_name(&self) -> &str {
        &self.vpn_name
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Replace the password, e.g. with one supplied through the environment.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub(crate) fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl SessionServiceFactory for BasicAuthSessionServiceFactory {
    type Service = BasicAuthSessionService;

    fn settings(&self) -> &FactorySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut FactorySettings {
        &mut self.settings
    }

    fn create(&self) -> Result<BasicAuthSessionService, SessionError> {
        validate(&self.host, &self.username)?;

        let id = SessionId::new();
        let client_name = format!("{CLIENT_NAME_PREFIX}-{id}");
        let properties =
            SessionProperties::new(&self.host, &self.vpn_name, &self.username, client_name)
                .with_queue(self.settings.queue().cloned())
                .with_submission_mode(self.settings.submission_mode())
                .with_retry(self.retry);

        log::debug!(
            "Created session {} for {} (queue: {}, submission mode: {})",
            id,
            self.host,
            properties
                .queue
                .as_ref()
                .map(|q| q.name())
                .unwrap_or("<unbound>"),
            properties
                .submission_mode
                .map(|m| m.as_str())
                .unwrap_or("<unset>")
        );

        Ok(BasicAuthSessionService::new(
            id,
            properties,
            self.password.clone(),
        ))
    }
}

impl std::fmt::Debug for BasicAuthSessionServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthSessionServiceFactory")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("vpn_name", &self.vpn_name)
            .field("retry", &self.retry)
            .field("settings", &self.settings)
            .finish()
    }
}

fn validate(host: &str, username: &str) -> Result<(), SessionError> {
    if host.trim().is_empty() {
        return Err(SessionError::InvalidConfig("host is required".to_string()));
    }
    if username.trim().is_empty() {
        return Err(SessionError::InvalidConfig(
            "username is required".to_string(),
        ));
    }
    Ok(())
}

/// Builder for [`BasicAuthSessionServiceFactory`].
#[derive(Default)]
pub struct BasicAuthSessionServiceFactoryBuilder {
    host: Option<String>,
    username: Option<String>,
    password: Option<String>,
    vpn_name: Option<String>,
    retry: Option<RetryPolicy>,
}

impl BasicAuthSessionServiceFactoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Broker host, e.g. `tcp://broker:55555`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Message VPN; defaults to `default`.
    pub fn vpn_name(mut self, vpn_name: impl Into<String>) -> Self {
        self.vpn_name = Some(vpn_name.into());
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Build the factory. Fails if host or username is missing.
    pub fn build(self) -> Result<BasicAuthSessionServiceFactory, SessionError> {
        let host = self.host.unwrap_or_default();
        let username = self.username.unwrap_or_default();
        validate(&host, &username)?;

        Ok(BasicAuthSessionServiceFactory {
            host,
            username,
            password: self.password.unwrap_or_default(),
            vpn_name: self
                .vpn_name
                .unwrap_or_else(|| DEFAULT_VPN_NAME.to_string()),
            retry: self.retry.unwrap_or_default(),
            settings: FactorySettings::new(),
        })
    }
}
