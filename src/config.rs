use std::env;
use std::path::Path;

use crate::error::{Error, Result};

pub const EMAIL_VAR: &str = "RG_DASHBOARD_EMAIL";
pub const PASSWORD_VAR: &str = "RG_DASHBOARD_PASSWORD";
pub const HOST_VAR: &str = "RG_DASHBOARD_API_HOST";

/// Dashboard credentials and API host, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub email: String,
    pub password: String,
    pub host: String,
}

impl Config {
    pub fn new(email: &str, password: &str, host: &str) -> Self {
        Config {
            email: email.to_string(),
            password: password.to_string(),
            host: host.to_string(),
        }
    }

    /// Reads the three dashboard variables from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            email: require(EMAIL_VAR)?,
            password: require(PASSWORD_VAR)?,
            host: require(HOST_VAR)?,
        })
    }
}

/// Loads `file` into the environment, then resolves the config from it.
/// Variables already set in the environment win over the file.
pub fn load_env(file: &Path) -> Result<Config> {
    dotenv::from_path(file).map_err(|source| Error::ConfigSource {
        path: file.to_path_buf(),
        source,
    })?;

    Config::from_env()
}

fn require(key: &'static str) -> Result<String> {
    env::var(key).map_err(|_| Error::ConfigMissing(key))
}
