// Unit tests for credential resolution
// Lookup-based tests are pure; env-file tests touch the process env and run serially

use crate::config::{
    API_KEY_VAR, APP_ID_VAR, APP_KEY_VAR, EMAIL_VAR, InoreaderConfig, PASSWORD_VAR,
};
use crate::error::ConfigError;

use std::collections::HashMap;
use std::env;
use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;

fn valid_vars() -> HashMap<String, String> {
    HashMap::from([
        (APP_ID_VAR.to_string(), "1000001234".to_string()),
        (APP_KEY_VAR.to_string(), "abcdefABCDEF1234".to_string()),
        (EMAIL_VAR.to_string(), "reader@example.com".to_string()),
        (PASSWORD_VAR.to_string(), " pass word ".to_string()),
    ])
}

fn resolve(vars: &HashMap<String, String>) -> Result<InoreaderConfig, ConfigError> {
    InoreaderConfig::from_lookup(|name| vars.get(name).cloned())
}

fn clear_process_vars() {
    for name in [APP_ID_VAR, APP_KEY_VAR, API_KEY_VAR, EMAIL_VAR, PASSWORD_VAR] {
        // SAFETY: every test touching the process environment is #[serial].
        unsafe {
            env::remove_var(name);
            env::remove_var(name.to_ascii_lowercase());
        }
    }
}

/// **VALUE**: Verifies a complete variable set resolves with values intact.
///
/// **BUG THIS CATCHES**: Would catch the password being trimmed like other values.
#[test]
fn given_all_variables_when_resolved_then_config_has_values() {
    let config = resolve(&valid_vars()).unwrap();

    assert_eq!(config.app_id(), "1000001234");
    assert_eq!(config.app_key(), "abcdefABCDEF1234");
    assert_eq!(config.email(), "reader@example.com");
    assert_eq!(config.password().expose(), " pass word ");
}

/// **VALUE**: Verifies resolution is idempotent.
///
/// **WHY THIS MATTERS**: The resolver must not consume or mutate its inputs.
///
/// **BUG THIS CATCHES**: Would catch PartialEq missing or ignoring the password.
#[test]
fn given_unchanged_variables_when_resolved_twice_then_values_equal() {
    let vars = valid_vars();

    let first = resolve(&vars).unwrap();
    let second = resolve(&vars).unwrap();

    assert_eq!(first, second);
}

/// **VALUE**: Verifies each missing variable is named in the error.
///
/// **BUG THIS CATCHES**: Would catch a generic error that hides which value is absent.
#[test]
fn given_missing_variable_when_resolved_then_error_names_it() {
    for name in [APP_ID_VAR, APP_KEY_VAR, EMAIL_VAR, PASSWORD_VAR] {
        // GIVEN: All variables but one
        let mut vars = valid_vars();
        vars.remove(name);

        // WHEN: Resolving
        let result = resolve(&vars);

        // THEN: Missing error naming the variable
        match result {
            Err(ConfigError::Missing { variable, .. }) => assert_eq!(variable, name),
            other => panic!("expected Missing for {name}, got {other:?}"),
        }
    }
}

/// **VALUE**: Verifies blank values count as missing.
#[test]
fn given_blank_variable_when_resolved_then_missing() {
    let mut vars = valid_vars();
    vars.insert(PASSWORD_VAR.to_string(), "   ".to_string());

    assert!(matches!(resolve(&vars), Err(ConfigError::Missing { .. })));
}

/// **VALUE**: Verifies malformed email addresses are rejected before any network call.
///
/// **BUG THIS CATCHES**: Would catch the email pattern accepting bare user names.
#[test]
fn given_malformed_email_when_resolved_then_validation_error() {
    for email in ["reader", "reader@", "@example.com", "reader@example", "a b@example.com"] {
        let mut vars = valid_vars();
        vars.insert(EMAIL_VAR.to_string(), email.to_string());

        let result = resolve(&vars);

        assert!(
            matches!(result, Err(ConfigError::Validation { .. })),
            "{email} should be rejected"
        );
    }
}

/// **VALUE**: Verifies the older `API_KEY` name is accepted when `APP_KEY` is absent.
#[test]
fn given_only_api_key_variable_when_resolved_then_used_as_app_key() {
    let mut vars = valid_vars();
    vars.remove(APP_KEY_VAR);
    vars.insert(API_KEY_VAR.to_string(), "legacy-key".to_string());

    let config = resolve(&vars).unwrap();

    assert_eq!(config.app_key(), "legacy-key");
}

/// **VALUE**: Verifies lower-case variable names are honored.
///
/// **BUG THIS CATCHES**: Would catch `.env` files written as `inoreader_email=...`
/// being ignored.
#[test]
fn given_lower_case_names_when_resolved_then_values_found() {
    let vars: HashMap<String, String> = valid_vars()
        .into_iter()
        .map(|(k, v)| (k.to_ascii_lowercase(), v))
        .collect();

    let config = resolve(&vars).unwrap();

    assert_eq!(config.email(), "reader@example.com");
}

/// **VALUE**: Verifies the password never shows up in Debug output of the config.
#[test]
fn given_config_when_debug_formatted_then_password_hidden() {
    let config = resolve(&valid_vars()).unwrap();

    let debug = format!("{:?}", config);

    assert!(!debug.contains("pass word"));
    assert!(debug.contains("reader@example.com"));
}

/// **VALUE**: Verifies values from an env file are used when the process env is empty.
///
/// **WHY THIS MATTERS**: The `.env` file is the documented local setup.
#[test]
#[serial]
fn given_env_file_when_loaded_then_values_resolved() {
    // GIVEN: Empty process env and an env file
    clear_process_vars();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "INOREADER_APP_ID=42").unwrap();
    writeln!(file, "INOREADER_APP_KEY=key-from-file").unwrap();
    writeln!(file, "inoreader_email=file@example.com").unwrap();
    writeln!(file, "INOREADER_PASSWORD=\"from file\"").unwrap();

    // WHEN: Loading with that file
    let config = InoreaderConfig::load_from(Some(file.path())).unwrap();

    // THEN: Values come from the file
    assert_eq!(config.app_id(), "42");
    assert_eq!(config.email(), "file@example.com");
    assert_eq!(config.password().expose(), "from file");

    // AND: The process env was not modified
    assert!(env::var(APP_ID_VAR).is_err());
}

/// **VALUE**: Verifies process variables take precedence over the env file.
#[test]
#[serial]
fn given_process_and_file_values_when_loaded_then_process_wins() {
    clear_process_vars();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "INOREADER_APP_ID=from-file").unwrap();
    writeln!(file, "INOREADER_APP_KEY=key").unwrap();
    writeln!(file, "INOREADER_EMAIL=file@example.com").unwrap();
    writeln!(file, "INOREADER_PASSWORD=secret").unwrap();

    // SAFETY: serialized by #[serial].
    unsafe { env::set_var(APP_ID_VAR, "from-process") };

    let result = InoreaderConfig::load_from(Some(file.path()));
    clear_process_vars();

    assert_eq!(result.unwrap().app_id(), "from-process");
}

/// **VALUE**: Verifies a missing env file is not an error by itself.
#[test]
#[serial]
fn given_missing_env_file_when_loaded_then_falls_back_to_process_env() {
    clear_process_vars();
    let dir = tempfile::tempdir().unwrap();
    let absent = dir.path().join(".env");

    let result = InoreaderConfig::load_from(Some(&absent));

    // Nothing is set anywhere, so resolution fails on the first variable.
    match result {
        Err(ConfigError::Missing { variable, .. }) => assert_eq!(variable, APP_ID_VAR),
        other => panic!("expected Missing, got {other:?}"),
    }
}

/// **VALUE**: Verifies a malformed env file is reported with its path.
#[test]
#[serial]
fn given_malformed_env_file_when_loaded_then_env_file_error() {
    clear_process_vars();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "INOREADER_APP_ID='unterminated").unwrap();

    let result = InoreaderConfig::load_from(Some(file.path()));

    match result {
        Err(ConfigError::EnvFile { path, .. }) => assert_eq!(path, file.path()),
        other => panic!("expected EnvFile, got {other:?}"),
    }
}
