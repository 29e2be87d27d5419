//! Credential resolution from the environment.
//!
//! Values are read from `INOREADER_*` variables, falling back to an optional
//! `.env` file. The file is parsed without touching the process environment,
//! and real environment variables always win over it.

use crate::error::ConfigError;

use common::RedactedSecret;

use std::collections::HashMap;
use std::env;
use std::path::Path;

use const_format::concatcp;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

pub const ENV_PREFIX: &str = "INOREADER_";
pub const ENV_FILE_NAME: &str = ".env";

pub const APP_ID_VAR: &str = concatcp!(ENV_PREFIX, "APP_ID");
pub const APP_KEY_VAR: &str = concatcp!(ENV_PREFIX, "APP_KEY");
/// Older name for the app key, still accepted.
pub const API_KEY_VAR: &str = concatcp!(ENV_PREFIX, "API_KEY");
pub const EMAIL_VAR: &str = concatcp!(ENV_PREFIX, "EMAIL");
pub const PASSWORD_VAR: &str = concatcp!(ENV_PREFIX, "PASSWORD");

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

/// Inoreader account credentials.
///
/// Immutable once resolved. The password is held as a [`RedactedSecret`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InoreaderConfig {
    app_id: String,
    app_key: String,
    email: String,
    password: RedactedSecret,
}

impl InoreaderConfig {
    /// Build a config from explicit values, applying the same validation as
    /// the environment resolver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a value is blank or the email is malformed.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            app_id: app_id.into().trim().to_string(),
            app_key: app_key.into().trim().to_string(),
            email: email.into().trim().to_string(),
            password: RedactedSecret::new(password),
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve from the process environment and `./.env`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some(Path::new(ENV_FILE_NAME)))
    }

    /// Resolve from the process environment and an optional env file.
    ///
    /// A missing env file is skipped. An unreadable or malformed one is an error.
    pub fn load_from(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_vars = match env_file {
            Some(path) => read_env_file(path)?,
            None => HashMap::new(),
        };

        Self::from_lookup(|name| process_var(name).or_else(|| file_vars.get(name).cloned()))
    }

    /// Resolve from an arbitrary variable lookup.
    ///
    /// Each variable is tried upper-case first, then lower-case.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id =
            lookup_var(&lookup, APP_ID_VAR).ok_or_else(|| ConfigError::missing(APP_ID_VAR))?;
        let app_key = lookup_var(&lookup, APP_KEY_VAR)
            .or_else(|| lookup_var(&lookup, API_KEY_VAR))
            .ok_or_else(|| ConfigError::missing(APP_KEY_VAR))?;
        let email =
            lookup_var(&lookup, EMAIL_VAR).ok_or_else(|| ConfigError::missing(EMAIL_VAR))?;
        let password =
            lookup_raw(&lookup, PASSWORD_VAR).ok_or_else(|| ConfigError::missing(PASSWORD_VAR))?;

        let config = Self::new(app_id, app_key, email, password)?;
        info!(
            "Inoreader credentials resolved for {} (app id {})",
            config.email, config.app_id
        );
        Ok(config)
    }

    /// Validate credential shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] naming the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::validation("app_id cannot be empty"));
        }

        if self.app_key.is_empty() {
            return Err(ConfigError::validation("app_key cannot be empty"));
        }

        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(ConfigError::validation(format!(
                "Invalid email address: '{}'",
                self.email
            )));
        }

        if self.password.expose().trim().is_empty() {
            return Err(ConfigError::validation("password cannot be empty"));
        }

        Ok(())
    }

    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &RedactedSecret {
        &self.password
    }
}

/// Trimmed, non-blank value of a variable.
fn lookup_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_raw(lookup, name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Untrimmed value of a variable; blank counts as unset.
fn lookup_raw<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .or_else(|| lookup(&name.to_ascii_lowercase()))
        .filter(|value| !value.trim().is_empty())
}

fn process_var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {} contains invalid unicode, ignoring it", name);
            None
        }
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        debug!("No env file at {}, using process environment only", path.display());
        return Ok(HashMap::new());
    }

    let iter = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::env_file(path, e.to_string()))?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| ConfigError::env_file(path, e.to_string()))?;
        vars.insert(key, value);
    }

    debug!("Read {} entries from {}", vars.len(), path.display());
    Ok(vars)
}
