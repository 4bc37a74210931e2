//! Async HTTP client for the OLT device-management API.
//!
//! This crate is the transport layer of the `ponctl` workspace. It knows how
//! to build authenticated requests against the management backend and decode
//! its JSON payloads -- nothing more. Orchestration (status aggregation,
//! discovery, provisioning workflows) lives in `ponctl-core`.
//!
//! - **[`ApiClient`]** -- wraps `reqwest::Client` with URL construction,
//!   bearer-token injection, and response decoding. Endpoint groups (devices,
//!   ONUs) are inherent methods split across modules.
//! - **[`Session`]** -- the explicit authentication context. Obtained from
//!   [`Session::login`] or constructed from a stored token, and passed into
//!   [`ApiClient::new`]. No ambient credential state.
//! - **[`TransportConfig`]** -- shared TLS / timeout settings for building
//!   the underlying HTTP client.
//! - **[`models`]** -- wire types mirroring the backend's JSON field names.

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

mod devices;
mod onu;

pub use client::ApiClient;
pub use error::Error;
pub use models::{
    ActionMessage, AutofindOnu, Device, DeviceStatusResponse, OnuLookup, OnuRecord, OpticalInfo,
    ProvisionPayload, Service,
};
pub use session::Session;
pub use transport::{TlsMode, TransportConfig};
