//! CLI error types with miette diagnostics.
//!
//! Maps library and config errors into user-facing errors with actionable
//! help text and a stable exit code per class.

use miette::Diagnostic;
use thiserror::Error;

use aos_sw_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the switch")]
    #[diagnostic(
        code(aos_sw::connection_failed),
        help(
            "Check that the switch is reachable and its REST interface is enabled\n\
             (`web-management ssl` and `rest-interface` in the switch config)."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(aos_sw::tls_error),
        help("Check the ca_cert path in your profile, or drop --verify-tls for self-signed switches.")
    )]
    TlsError { message: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(aos_sw::auth_failed),
        help(
            "Verify the user name and password.\n\
             Store a password with: aos-sw config set-password --profile <name>"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(aos_sw::no_credentials),
        help("Set username/password in the profile, or AOS_SW_USERNAME and AOS_SW_PASSWORD.")
    )]
    NoCredentials { profile: String },

    #[error("Logout failed: {message}")]
    #[diagnostic(
        code(aos_sw::logout_failed),
        help("The connection was closed; the session expires on the switch after its idle timeout.")
    )]
    LogoutFailed { message: String },

    // ── Switch API ───────────────────────────────────────────────────
    #[error("Not found: {body}")]
    #[diagnostic(code(aos_sw::not_found))]
    NotFound { body: String },

    #[error("Switch API error (HTTP {status}): {body}")]
    #[diagnostic(code(aos_sw::api_error))]
    ApiError { status: u16, body: String },

    #[error("Command '{command}' failed on the switch: {message}")]
    #[diagnostic(code(aos_sw::cli_command))]
    CommandFailed { command: String, message: String },

    #[error("Unexpected response from the switch: {message}")]
    #[diagnostic(code(aos_sw::unexpected_response))]
    UnexpectedResponse { message: String },

    #[error("Session error: {message}")]
    #[diagnostic(code(aos_sw::session))]
    Session { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(aos_sw::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(aos_sw::confirmation_required),
        help("Use --yes (-y) to confirm.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(aos_sw::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No switch configured")]
    #[diagnostic(
        code(aos_sw::no_config),
        help(
            "Pass --host, or add a profile to the config file.\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(aos_sw::config))]
    Config(Box<ConfigError>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    #[diagnostic(code(aos_sw::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    #[diagnostic(code(aos_sw::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    #[diagnostic(code(aos_sw::toml))]
    Toml(#[from] toml::ser::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. }
            | Self::ProfileNotFound { .. }
            | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library error mapping ────────────────────────────────────────────

impl From<aos_sw_api::Error> for CliError {
    fn from(err: aos_sw_api::Error) -> Self {
        use aos_sw_api::Error;

        match err {
            Error::Connection(source) => Self::ConnectionFailed { source },
            Error::Tls(message) => Self::TlsError { message },
            Error::Authentication { message } => Self::AuthFailed { message },
            Error::Logout { message } => Self::LogoutFailed { message },
            Error::ResourceOperation { status: 404, body } => Self::NotFound { body },
            Error::ResourceOperation { status: 401, body } => Self::AuthFailed { message: body },
            Error::ResourceOperation { status, body } => Self::ApiError { status, body },
            Error::Deserialization { message, .. } => Self::UnexpectedResponse { message },
            Error::InvalidUrl(e) => Self::Validation {
                field: "host".into(),
                reason: e.to_string(),
            },
            Error::InvalidPath(path) => Self::Validation {
                field: "id".into(),
                reason: format!("'{path}' is not a valid resource path"),
            },
            Error::Encode(e) => Self::Json(e),
            other @ (Error::NotAuthenticated | Error::SessionActive | Error::Closed) => {
                Self::Session {
                    message: other.to_string(),
                }
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => Self::NoCredentials { profile },
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_its_exit_code() {
        let err = CliError::from(aos_sw_api::Error::ResourceOperation {
            status: 404,
            body: "VLAN 99 not found".into(),
        });
        assert!(matches!(err, CliError::NotFound { .. }));
        assert_eq!(err.exit_code(), exit_code::NOT_FOUND);
    }

    #[test]
    fn rejected_login_is_an_auth_failure() {
        let err = CliError::from(aos_sw_api::Error::Authentication {
            message: "login failed (HTTP 401)".into(),
        });
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn missing_profile_credentials_keep_profile_name() {
        let err = CliError::from(ConfigError::NoCredentials {
            profile: "lab".into(),
        });
        assert!(matches!(err, CliError::NoCredentials { ref profile } if profile == "lab"));
    }
}
