//! Orchestration layer between `ponctl-api` and UI consumers.
//!
//! This crate owns the business logic of the ONU management workflows.
//! Each controller exclusively owns its result and loading state; views
//! receive value snapshots, never live references:
//!
//! - **[`StatusAggregator`]** -- fetches the OLT device list, then resolves
//!   per-device reachability one device at a time. A failed status fetch
//!   marks that device [`DeviceStatus::Unknown`] without aborting the rest.
//!
//! - **[`DiscoveryController`]** -- runs the two mutually exclusive
//!   discovery modes (autofind scan vs. free-text search) over a single
//!   [`DiscoveryResults`] slot, so stale rows from one mode can never be
//!   shown alongside fresh rows from the other.
//!
//! - **[`ProvisionWorkflow`]** -- the duplicate-check → confirm → submit
//!   state machine for registering an ONU, with an explicit
//!   [`ProvisionPhase`] so illegal flag combinations are unrepresentable.
//!
//! - **[`OnuView`]** -- a loaded ONU detail view gating reboot/delete
//!   behind confirmation and single-flight [`ActionKind`] tracking.
//!
//! User confirmation is abstracted behind the [`Confirmation`] trait so
//! workflows are testable without any interactive UI.

pub mod config;
pub mod confirm;
pub mod discovery;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod provision;
pub mod status;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, ControllerConfig, TlsVerification};
pub use confirm::{AutoApprove, Confirmation};
pub use discovery::{DiscoveryController, DiscoveryResults};
pub use error::CoreError;
pub use lifecycle::{ActionKind, ActionOutcome, OnuView};
pub use provision::{
    NATIVE_SERVICE_ID, ProvisionPhase, ProvisionWorkflow, SubmitError, SubmitOutcome,
};
pub use status::StatusAggregator;

// Re-export model types at the crate root for ergonomics.
pub use model::{Device, DeviceStatus, OnuRecord, SlotPath, SlotPathError};
