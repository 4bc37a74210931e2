//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `SubmitError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use ponctl_core::{CoreError, SubmitError};

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the management backend at {url}")]
    #[diagnostic(
        code(ponctl::connection_failed),
        help(
            "Check that the backend is running and accessible.\n\
             URL: {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Authentication failed")]
    #[diagnostic(
        code(ponctl::auth_failed),
        help(
            "Verify your token or technician credentials.\n\
             Run: ponctl config set-token --profile {profile}"
        )
    )]
    AuthFailed { profile: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(ponctl::no_credentials),
        help(
            "Configure credentials with: ponctl config init\n\
             Or set the PONCTL_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(ponctl::not_found),
        help("Run: ponctl {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Provisioning ─────────────────────────────────────────────────

    #[error("Failed to delete the existing registration: {message}")]
    #[diagnostic(
        code(ponctl::delete_step_failed),
        help("The add was NOT attempted -- the existing registration is still in place.")
    )]
    DeleteStep { message: String },

    #[error("Failed to provision the ONU: {message}")]
    #[diagnostic(code(ponctl::add_step_failed))]
    AddStep { message: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("API error: {message}")]
    #[diagnostic(code(ponctl::api_error))]
    ApiError {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ponctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(ponctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: ponctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(ponctl::no_config),
        help(
            "Create one with: ponctl config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(ponctl::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => CliError::ConnectionFailed {
                url,
                source: reason.into(),
            },

            CoreError::AuthenticationFailed { message: _ } => CliError::AuthFailed {
                profile: "current".into(),
            },

            CoreError::OnuNotFound { sn } => CliError::NotFound {
                resource_type: "ONU".into(),
                identifier: sn,
                list_command: "onu search".into(),
            },

            CoreError::InvalidSlotPath { path } => CliError::Validation {
                field: "fsp".into(),
                reason: format!("{path:?} has no interface/port split"),
            },

            CoreError::ValidationFailed { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Api { message, status } => CliError::ApiError { message, status },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            CoreError::Internal(message) => CliError::ApiError {
                message,
                status: None,
            },
        }
    }
}

// ── SubmitError → CliError mapping ───────────────────────────────────
//
// The delete and add steps surface distinct failures: a delete failure
// means no add was attempted.

impl From<SubmitError> for CliError {
    fn from(err: SubmitError) -> Self {
        match err {
            SubmitError::SlotPath(e) => CliError::Validation {
                field: "fsp".into(),
                reason: e.to_string(),
            },
            SubmitError::NoService => CliError::Validation {
                field: "service".into(),
                reason: "no VLAN service selected and none available; \
                         pass --service or --native-vlan"
                    .into(),
            },
            SubmitError::Delete(e) => CliError::DeleteStep {
                message: e.to_string(),
            },
            SubmitError::Add(e) => CliError::AddStep {
                message: e.to_string(),
            },
        }
    }
}

impl From<ponctl_config::ConfigError> for CliError {
    fn from(err: ponctl_config::ConfigError) -> Self {
        match err {
            ponctl_config::ConfigError::NoCredentials { profile } => {
                CliError::NoCredentials { profile }
            }
            ponctl_config::ConfigError::Validation { field, reason } => {
                CliError::Validation { field, reason }
            }
            ponctl_config::ConfigError::Figment(e) => CliError::Config(e),
            ponctl_config::ConfigError::Io(e) => CliError::Io(e),
            ponctl_config::ConfigError::Serialization(e) => CliError::Validation {
                field: "config".into(),
                reason: e.to_string(),
            },
        }
    }
}
