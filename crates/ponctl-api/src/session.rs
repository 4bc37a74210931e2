// Session authentication
//
// The backend issues short-lived bearer tokens from `POST /login`.
// A `Session` is the explicit credential context handed to
// `ApiClient::new` -- controllers never read tokens from ambient state.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Response body from the login endpoint.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
}

fn default_token_type() -> String {
    "Bearer".into()
}

/// Authenticated session context for the management API.
///
/// Carries the bearer token applied to every request. Construct one via
/// [`Session::login`] (username/password exchange) or [`Session::bearer`]
/// (pre-issued token, e.g. from a config profile).
#[derive(Debug, Clone)]
pub struct Session {
    token_type: String,
    access_token: SecretString,
}

impl Session {
    /// Wrap a pre-issued bearer token.
    pub fn bearer(token: SecretString) -> Self {
        Self {
            token_type: "Bearer".into(),
            access_token: token,
        }
    }

    /// Exchange technician credentials for a session token.
    ///
    /// `POST {base}/login` with `{ "email": ..., "password": ... }`.
    /// Any non-success status is reported as an authentication failure --
    /// the backend does not distinguish unknown users from bad passwords.
    pub async fn login(
        base_url: &Url,
        email: &str,
        password: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let url = base_url.join("login")?;
        debug!("logging in at {}", url);

        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
        });

        let resp = http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status})"),
            });
        }

        let login: LoginResponse = resp.json().await.map_err(Error::Transport)?;
        debug!("login successful");

        Ok(Self {
            token_type: login.token_type,
            access_token: SecretString::from(login.access_token),
        })
    }

    /// The `Authorization` header value for this session.
    pub(crate) fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token.expose_secret())
    }
}
