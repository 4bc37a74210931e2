// ── Controller configuration ──
//
// How to reach and authenticate against the management backend. Built by
// the config/CLI layer, consumed by `connect()` which produces the
// authenticated `ApiClient` the controllers run against.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use ponctl_api::{ApiClient, Session, TlsMode, TransportConfig};

use crate::error::CoreError;

/// Credentials for establishing a session.
#[derive(Debug, Clone)]
pub enum AuthCredentials {
    /// A pre-issued bearer token.
    Token(SecretString),
    /// Technician login; exchanged for a token at connect time.
    Login {
        email: String,
        password: SecretString,
    },
}

/// TLS verification policy for the backend connection.
#[derive(Debug, Clone)]
pub enum TlsVerification {
    SystemDefaults,
    CustomCa(PathBuf),
    DangerAcceptInvalid,
}

/// Connection settings for the management backend.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub url: Url,
    pub auth: AuthCredentials,
    pub tls: TlsVerification,
    pub timeout: Duration,
}

impl ControllerConfig {
    fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }

    /// Establish a session and build the authenticated API client.
    ///
    /// With [`AuthCredentials::Login`] this performs the credential
    /// exchange up front; with a stored token it connects lazily (the
    /// first request will surface an invalid token as an
    /// [`CoreError::AuthenticationFailed`]).
    pub async fn connect(&self) -> Result<ApiClient, CoreError> {
        let transport = self.transport();
        let session = match &self.auth {
            AuthCredentials::Token(token) => Session::bearer(token.clone()),
            AuthCredentials::Login { email, password } => {
                Session::login(&self.url, email, password, &transport).await?
            }
        };
        Ok(ApiClient::new(self.url.clone(), session, &transport)?)
    }
}
