// ── ONU provisioning workflow ──
//
// Duplicate-check → confirm/resolve → submit state machine for adding an
// ONU. Entered with a source record from discovery and a target device;
// the phase enum makes the legal transitions explicit:
//
//   Idle -> Checking -> Ready { existing: None | Some(reg) }
//   Ready -> Submitting -> Succeeded          (one add per workflow run)
//   Ready -> Ready                            (overwrite declined, or a
//                                              submit step failed)
//
// When the serial number is already registered, submit first asks for
// confirmation and deletes the existing registration; declining aborts
// the whole submit with no side effect.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use ponctl_api::{ApiClient, OnuLookup, ProvisionPayload, Service};

use crate::confirm::Confirmation;
use crate::error::CoreError;
use crate::model::{OnuRecord, SlotPathError};

/// Reserved service id meaning "native VLAN"; never present in the
/// fetched service list.
pub const NATIVE_SERVICE_ID: u32 = 0;

/// Where the provisioning workflow currently stands.
#[derive(Debug, Clone)]
pub enum ProvisionPhase {
    /// Created, duplicate check not yet run.
    Idle,
    /// Duplicate check in flight.
    Checking,
    /// Awaiting user input. `existing` carries the registration found
    /// during the duplicate check, if any.
    Ready { existing: Option<OnuRecord> },
    /// Submit in flight (delete-then-add or plain add).
    Submitting,
    /// The add call was accepted; the workflow is finished.
    Succeeded { message: String },
}

/// Result of a submit attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the add; carries its acknowledgement message.
    Provisioned(String),
    /// The user declined to overwrite an existing registration. No delete
    /// and no add were issued; the workflow awaits input again.
    Cancelled,
    /// Submit is inert in the current phase (check pending, submit
    /// already in flight, or already succeeded).
    NotReady,
}

/// A submit attempt failed. The delete and add steps surface distinct
/// errors: a delete failure means the add was never attempted.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("cannot derive interface/port: {0}")]
    SlotPath(#[from] SlotPathError),

    #[error("no VLAN service selected and none available")]
    NoService,

    #[error("failed to delete existing registration: {0}")]
    Delete(#[source] CoreError),

    #[error("failed to provision ONU: {0}")]
    Add(#[source] CoreError),
}

/// The add-ONU state machine for one source record and target device.
pub struct ProvisionWorkflow {
    client: Arc<ApiClient>,
    device_id: u64,
    source: OnuRecord,
    phase: ProvisionPhase,
    services: Vec<Service>,
    service_id: Option<u32>,
    native_vlan: bool,
    description: String,
}

impl ProvisionWorkflow {
    /// Start a workflow for provisioning `source` onto `device_id`.
    pub fn new(client: Arc<ApiClient>, device_id: u64, source: OnuRecord) -> Self {
        Self {
            client,
            device_id,
            source,
            phase: ProvisionPhase::Idle,
            services: Vec::new(),
            service_id: None,
            native_vlan: false,
            description: String::new(),
        }
    }

    pub fn phase(&self) -> &ProvisionPhase {
        &self.phase
    }

    pub fn source(&self) -> &OnuRecord {
        &self.source
    }

    /// The registration found during the duplicate check, if any.
    pub fn existing(&self) -> Option<&OnuRecord> {
        match &self.phase {
            ProvisionPhase::Ready { existing } => existing.as_ref(),
            _ => None,
        }
    }

    /// Whether submit would currently do anything.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, ProvisionPhase::Ready { .. })
    }

    // ── Duplicate check ─────────────────────────────────────────────

    /// Run the duplicate check for the source serial number.
    ///
    /// The backend's "no such ONU" sentinel is the expected outcome for a
    /// fresh ONU and lands in `Ready { existing: None }`; a full record
    /// lands in `Ready { existing: Some(..) }` with the registration
    /// captured for the overwrite path. The editable description is
    /// seeded from the source record when not found, and from the
    /// existing registration when found.
    ///
    /// A transport failure returns the workflow to `Idle` -- the check
    /// can be retried.
    pub async fn check(&mut self) -> Result<&ProvisionPhase, CoreError> {
        if !matches!(self.phase, ProvisionPhase::Idle) {
            return Ok(&self.phase);
        }

        self.phase = ProvisionPhase::Checking;
        match self.client.find_onu_by_sn(self.device_id, &self.source.sn).await {
            Ok(OnuLookup::Found(record)) => {
                let existing = OnuRecord::from(record);
                debug!(sn = %self.source.sn, fsp = %existing.fsp, "SN already registered");
                self.description = existing.description.clone();
                self.phase = ProvisionPhase::Ready {
                    existing: Some(existing),
                };
            }
            Ok(OnuLookup::NotFound { detail }) => {
                debug!(sn = %self.source.sn, %detail, "SN not registered");
                self.description = self.source.description.clone();
                self.phase = ProvisionPhase::Ready { existing: None };
            }
            Err(err) => {
                self.phase = ProvisionPhase::Idle;
                return Err(err.into());
            }
        }
        Ok(&self.phase)
    }

    // ── VLAN / description input ────────────────────────────────────

    /// Fetch the device's VLAN service list and default the selection to
    /// the first entry (unless the native toggle is already on).
    ///
    /// A fetch failure leaves the list empty -- the technician can still
    /// provision with the native VLAN.
    pub async fn load_services(&mut self) -> &[Service] {
        match self.client.device_services(self.device_id).await {
            Ok(list) => {
                self.services = list;
                if !self.native_vlan && self.service_id.is_none() {
                    self.service_id = self.services.first().map(|s| s.id);
                }
            }
            Err(err) => {
                warn!(device_id = self.device_id, error = %err, "failed to load VLAN services");
                self.services.clear();
            }
        }
        &self.services
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service_id(&self) -> Option<u32> {
        self.service_id
    }

    pub fn native_vlan(&self) -> bool {
        self.native_vlan
    }

    /// Toggle the native-VLAN mode.
    ///
    /// Enabling forces `service_id` to [`NATIVE_SERVICE_ID`] and locks
    /// manual selection; disabling restores the first available service
    /// id (or leaves it unset when the list is empty).
    pub fn set_native_vlan(&mut self, enabled: bool) {
        self.native_vlan = enabled;
        if enabled {
            self.service_id = Some(NATIVE_SERVICE_ID);
        } else {
            self.service_id = self.services.first().map(|s| s.id);
        }
    }

    /// Select a VLAN service manually. Rejected while the native toggle
    /// is on, and for ids not present in the fetched list.
    pub fn select_service(&mut self, id: u32) -> Result<(), CoreError> {
        if self.native_vlan {
            return Err(CoreError::ValidationFailed {
                message: "native VLAN is enabled; disable it to select a service".into(),
            });
        }
        if !self.services.iter().any(|s| s.id == id) {
            return Err(CoreError::ValidationFailed {
                message: format!("service id {id} is not offered by this device"),
            });
        }
        self.service_id = Some(id);
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    // ── Submit ──────────────────────────────────────────────────────

    /// Attempt the provision.
    ///
    /// When the duplicate check found an existing registration, the user
    /// must approve deleting it first; declining cancels the submit with
    /// no call issued. The submitted interface/port derive from the
    /// *source* record's slot path, validated before anything destructive
    /// happens.
    pub async fn submit(
        &mut self,
        confirm: &impl Confirmation,
    ) -> Result<SubmitOutcome, SubmitError> {
        let ProvisionPhase::Ready { existing } = &self.phase else {
            return Ok(SubmitOutcome::NotReady);
        };
        let existing = existing.clone();

        // Validate the request before prompting or deleting anything.
        let (interface, port) = self.source.fsp.split()?;
        let Some(service_id) = self.service_id else {
            return Err(SubmitError::NoService);
        };

        if let Some(ref registration) = existing {
            let prompt = format!(
                "ONU with SN {} already exists at {}. Delete and continue?",
                registration.sn, registration.fsp
            );
            if !confirm.confirm(&prompt).await {
                debug!(sn = %self.source.sn, "overwrite declined; submit cancelled");
                return Ok(SubmitOutcome::Cancelled);
            }
        }

        self.phase = ProvisionPhase::Submitting;

        if let Some(registration) = existing.clone() {
            if let Err(err) = self
                .client
                .delete_onu(
                    self.device_id,
                    registration.fsp.as_str(),
                    &registration.ont_id,
                    &registration.sn,
                    &registration.description,
                )
                .await
            {
                self.phase = ProvisionPhase::Ready { existing };
                return Err(SubmitError::Delete(err.into()));
            }
            debug!(sn = %self.source.sn, "existing registration deleted");
        }

        let payload = ProvisionPayload {
            sn: self.source.sn.clone(),
            fsp: self.source.fsp.to_string(),
            interface,
            port,
            service_id,
            description: self.description.clone(),
            nativevlan: self.native_vlan,
        };

        match self.client.add_onu(self.device_id, &payload).await {
            Ok(ack) => {
                let message = ack
                    .message
                    .unwrap_or_else(|| "ONU provisioned successfully".to_owned());
                self.phase = ProvisionPhase::Succeeded {
                    message: message.clone(),
                };
                Ok(SubmitOutcome::Provisioned(message))
            }
            Err(err) => {
                self.phase = ProvisionPhase::Ready { existing };
                Err(SubmitError::Add(err.into()))
            }
        }
    }
}
