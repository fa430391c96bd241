use std::env;
use std::path::PathBuf;

use crate::config::ConfigError;

const CONFIG_DIR_NAME: &str = "solace-session";
const CONFIG_FILE_NAME: &str = "factory.json";

/// Return the user's home directory path.
///
/// Uses HOME on Unix-like systems and USERPROFILE on Windows.
pub fn get_home_dir() -> Result<PathBuf, ConfigError> {
    ["HOME", "USERPROFILE"]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(ConfigError::HomeNotSet)
}

/// Default location of the factory record: `~/.config/solace-session/factory.json`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_home_dir()?
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}
