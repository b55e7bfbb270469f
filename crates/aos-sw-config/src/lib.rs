//! Shared configuration for aos-sw tools.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `aos_sw_api::SwitchConfig`. The CLI layers its own
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use aos_sw_api::{Credentials, DeviceEndpoint, Scheme, SwitchConfig, TlsVerification};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const KEYRING_SERVICE: &str = "aos-sw";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named switch profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named switch profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Switch host name or IP, optionally with `:port`.
    pub host: String,

    /// REST API version (`/rest/v{n}/`).
    #[serde(default = "default_api_version")]
    pub api_version: u32,

    /// Use HTTPS (default) or plain HTTP.
    #[serde(default = "default_true")]
    pub https: bool,

    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Session cookie to resume instead of logging in.
    pub cookie: Option<String>,

    /// Environment variable name containing the session cookie.
    pub cookie_env: Option<String>,

    /// Verify the switch certificate against the system store.
    #[serde(default)]
    pub verify_tls: bool,

    /// Path to a custom CA certificate (PEM). Implies verification.
    pub ca_cert: Option<PathBuf>,

    /// Log out when the command finishes (default true).
    pub auto_logout: Option<bool>,

    /// Override the default timeout (seconds).
    pub timeout: Option<u64>,
}

fn default_api_version() -> u32 {
    7
}
fn default_true() -> bool {
    true
}

impl Profile {
    /// A profile for `host` with every other field at its default.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            api_version: default_api_version(),
            https: true,
            username: None,
            password: None,
            password_env: None,
            cookie: None,
            cookie_env: None,
            verify_tls: false,
            ca_cert: None,
            auto_logout: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "aos-sw", "aos-sw").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("aos-sw");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from `path`, merged over defaults and under `AOS_SW_*`
/// environment variables (`__` separates nested keys, e.g.
/// `AOS_SW_DEFAULTS__TIMEOUT=10`). A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("AOS_SW_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it cannot be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve the password: profile's `password_env`, then `AOS_SW_PASSWORD`,
/// then the system keyring, then plaintext in the profile.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Option<SecretString> {
    // 1. Profile's password_env → env var lookup
    if let Some(ref env_name) = profile.password_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }

    // 2. Global env var
    if let Ok(pw) = std::env::var("AOS_SW_PASSWORD") {
        return Some(SecretString::from(pw));
    }

    // 3. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password")) {
        if let Ok(pw) = entry.get_password() {
            return Some(SecretString::from(pw));
        }
    }

    // 4. Plaintext in config
    profile.password.clone().map(SecretString::from)
}

/// Store a password in the system keyring for `profile_name`.
pub fn store_password(profile_name: &str, password: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/password"))
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Validation {
            field: "keyring".into(),
            reason: e.to_string(),
        })
}

fn resolve_cookie(profile: &Profile) -> Option<SecretString> {
    if let Some(ref env_name) = profile.cookie_env {
        if let Ok(val) = std::env::var(env_name) {
            return Some(SecretString::from(val));
        }
    }
    profile.cookie.clone().map(SecretString::from)
}

/// Resolve username, password and optional session cookie.
///
/// A cookie alone is enough: login reuses it and never sends the
/// password, so a missing password is only an error without one.
pub fn resolve_credentials(profile: &Profile, profile_name: &str) -> Result<Credentials, ConfigError> {
    let no_credentials = || ConfigError::NoCredentials {
        profile: profile_name.into(),
    };

    let username = profile
        .username
        .clone()
        .or_else(|| std::env::var("AOS_SW_USERNAME").ok())
        .ok_or_else(no_credentials)?;

    let cookie = resolve_cookie(profile);
    let password = match (resolve_password(profile, profile_name), &cookie) {
        (Some(pw), _) => pw,
        (None, Some(_)) => SecretString::from(String::new()),
        (None, None) => return Err(no_credentials()),
    };

    let credentials = Credentials::new(username, password);
    Ok(match cookie {
        Some(cookie) => credentials.with_cookie(cookie),
        None => credentials,
    })
}

/// TLS policy of a profile: a CA file wins, then `verify_tls`, otherwise
/// verification is skipped (switches ship self-signed certificates).
pub fn resolve_tls(profile: &Profile) -> TlsVerification {
    if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else if profile.verify_tls {
        TlsVerification::SystemDefaults
    } else {
        TlsVerification::DangerAcceptInvalid
    }
}

/// Build a `SwitchConfig` from a profile, with no CLI flag overrides.
pub fn profile_to_switch_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<SwitchConfig, ConfigError> {
    let host = profile.host.trim();
    if host.is_empty() || host.contains('/') {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: format!("expected a host name or IP, got '{}'", profile.host),
        });
    }

    let scheme = if profile.https { Scheme::Https } else { Scheme::Http };
    let endpoint = DeviceEndpoint::new(host, profile.api_version)
        .with_scheme(scheme)
        .with_tls(resolve_tls(profile));

    let credentials = resolve_credentials(profile, profile_name)?;
    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(SwitchConfig::new(endpoint, credentials)
        .with_auto_logout(profile.auto_logout.unwrap_or(true))
        .with_timeout(timeout))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = r#"
default_profile = "lab"

[defaults]
output = "json"
timeout = 12

[profiles.lab]
host = "10.0.0.1"
username = "manager"
password = "lab-secret"

[profiles.core]
host = "core-sw1.example.net:8443"
api_version = 8
username = "automation"
cookie = "sessionId=resume-me"
ca_cert = "/etc/ssl/switch-ca.pem"
auto_logout = false
timeout = 60
"#;

    fn sample_config() -> Config {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        load_config_from(&path).unwrap()
    }

    #[test]
    fn loads_profiles_and_defaults_from_toml() {
        let config = sample_config();

        assert_eq!(config.default_profile.as_deref(), Some("lab"));
        assert_eq!(config.defaults.output, "json");
        assert_eq!(config.profiles.len(), 2);

        let lab = &config.profiles["lab"];
        assert_eq!(lab.api_version, 7);
        assert!(lab.https);
        assert!(!lab.verify_tls);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert_eq!(config.defaults.timeout, 30);
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn save_then_load_keeps_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.profiles.insert("edge".into(), Profile::new("10.1.1.1"));
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.profiles["edge"].host, "10.1.1.1");
    }

    #[test]
    fn tls_policy_prefers_ca_then_verify_flag() {
        let mut profile = Profile::new("10.0.0.1");
        assert_eq!(resolve_tls(&profile), TlsVerification::DangerAcceptInvalid);

        profile.verify_tls = true;
        assert_eq!(resolve_tls(&profile), TlsVerification::SystemDefaults);

        profile.ca_cert = Some("/tmp/ca.pem".into());
        assert_eq!(
            resolve_tls(&profile),
            TlsVerification::CustomCa("/tmp/ca.pem".into())
        );
    }

    #[test]
    fn cookie_profile_builds_switch_config() {
        let config = sample_config();
        let switch = profile_to_switch_config(&config.profiles["core"], "core", &config.defaults)
            .unwrap();

        assert_eq!(
            switch.endpoint.base_url().unwrap().as_str(),
            "https://core-sw1.example.net:8443/rest/v8/"
        );
        assert!(switch.credentials.has_cookie());
        assert_eq!(switch.credentials.username(), "automation");
        assert!(!switch.auto_logout);
        assert_eq!(switch.timeout, Duration::from_secs(60));
    }

    #[test]
    fn profile_timeout_falls_back_to_defaults() {
        let config = sample_config();
        let switch =
            profile_to_switch_config(&config.profiles["lab"], "lab", &config.defaults).unwrap();

        assert_eq!(switch.timeout, Duration::from_secs(12));
        assert!(switch.auto_logout);
        assert_eq!(
            switch.endpoint.base_url().unwrap().as_str(),
            "https://10.0.0.1/rest/v7/"
        );
    }

    #[test]
    fn host_with_path_is_rejected() {
        let profile = Profile::new("https://10.0.0.1/rest");
        let err = profile_to_switch_config(&profile, "bad", &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "host"));
    }
}
