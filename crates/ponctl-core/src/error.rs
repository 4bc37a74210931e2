// ── Core error types ──
//
// User-facing errors from ponctl-core. These are NOT transport-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<ponctl_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.
//
// Two outcomes deliberately have NO error variant: the backend's
// "no such ONU" sentinel (a normal lookup result, `OnuLookup::NotFound`)
// and a declined confirmation (a silent no-op).

use thiserror::Error;

use crate::model::SlotPathError;

/// Error type shared by every controller in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach management backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    // ── Data errors ──────────────────────────────────────────────────
    #[error("ONU not registered: {sn}")]
    OnuNotFound { sn: String },

    #[error("Malformed slot path: {path:?}")]
    InvalidSlotPath { path: String },

    // ── Operation errors ─────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── API errors (wrapped, not exposed raw) ────────────────────────
    #[error("API error: {message}")]
    Api {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<ponctl_api::Error> for CoreError {
    fn from(err: ponctl_api::Error) -> Self {
        match err {
            ponctl_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            ponctl_api::Error::Transport(ref e) => {
                if e.is_connect() || e.is_timeout() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            ponctl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ponctl_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            ponctl_api::Error::Api { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            ponctl_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

impl From<SlotPathError> for CoreError {
    fn from(err: SlotPathError) -> Self {
        CoreError::InvalidSlotPath { path: err.path }
    }
}
