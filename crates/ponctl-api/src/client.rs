// Management API HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, bearer-token
// injection, and response decoding. Endpoint groups (devices, ONUs) are
// implemented as inherent methods via separate files to keep this module
// focused on transport mechanics.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::session::Session;
use crate::transport::TransportConfig;

/// Authenticated HTTP client for the OLT management backend.
///
/// All methods return decoded JSON payloads; HTTP status handling and
/// deserialization failures are normalized into [`Error`] before the
/// caller sees them.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    /// Create a new client from a [`TransportConfig`].
    ///
    /// `base_url` is the backend root (e.g. `https://nms.example.net/api/`).
    /// The session is applied to every request as an `Authorization` header.
    pub fn new(
        base_url: Url,
        session: Session,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, session: Session) -> Self {
        Self {
            http,
            base_url,
            session,
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a full URL for an API path relative to the base.
    pub(crate) fn url(&self, path: &str) -> Url {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{base}/{path}")).expect("invalid API URL")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.authed(Method::GET, url).send().await?;
        Self::decode(resp).await
    }

    /// Send a GET request with query parameters and decode the JSON body.
    pub(crate) async fn get_query<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.authed(Method::GET, url).query(query).send().await?;
        Self::decode(resp).await
    }

    /// Send a POST request with a JSON body and decode the JSON response.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self.authed(Method::POST, url).json(body).send().await?;
        Self::decode(resp).await
    }

    /// Send a DELETE request with a JSON body and decode the JSON response.
    ///
    /// The delete endpoint takes its addressing fields in the request body,
    /// not the path -- unusual, but that is the backend contract.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("DELETE {}", url);
        let resp = self.authed(Method::DELETE, url).json(body).send().await?;
        Self::decode(resp).await
    }

    fn authed(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, self.session.header_value())
    }

    /// Normalize status handling and deserialization.
    ///
    /// 401 means the session token expired or was revoked. Other non-success
    /// statuses surface as [`Error::Api`] with a body preview; decode
    /// failures keep the full body for diagnostics.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                message: "session expired or invalid token".into(),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: body[..body.len().min(200)].to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })
    }
}
