// ── ONU lifecycle actions ──
//
// A loaded detail view for one registered ONU, gating reboot and delete
// behind explicit confirmation and single-flight tracking. At most one
// action can be in flight per view; both controls are inert while any
// action runs.

use std::sync::Arc;

use serde::Serialize;
use strum::Display;
use tracing::debug;

use ponctl_api::{ApiClient, OnuLookup, OpticalInfo};

use crate::confirm::Confirmation;
use crate::error::CoreError;
use crate::model::OnuRecord;

/// Which lifecycle action is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ActionKind {
    Reboot,
    Delete,
}

/// Result of a lifecycle action attempt that did not error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Reboot accepted; the view stays valid.
    Rebooted(String),
    /// Delete accepted; the detail view no longer addresses a registered
    /// ONU -- the caller should navigate back.
    Deleted(String),
    /// The user declined the confirmation. No call was issued.
    Declined,
    /// Another action is already in flight.
    Busy,
}

/// Detail view over one registered ONU.
///
/// Loading fetches the record by device id + serial number; a fetch
/// failure (or an unregistered SN) is terminal -- there is no partial
/// view of an unknown ONU.
pub struct OnuView {
    client: Arc<ApiClient>,
    device_id: u64,
    record: OnuRecord,
    action: Option<ActionKind>,
}

impl OnuView {
    pub async fn load(client: Arc<ApiClient>, device_id: u64, sn: &str) -> Result<Self, CoreError> {
        match client.find_onu_by_sn(device_id, sn).await? {
            OnuLookup::Found(record) => Ok(Self {
                client,
                device_id,
                record: OnuRecord::from(record),
                action: None,
            }),
            OnuLookup::NotFound { detail } => {
                debug!(sn, %detail, "detail view requested for unregistered SN");
                Err(CoreError::OnuNotFound { sn: sn.to_owned() })
            }
        }
    }

    pub fn record(&self) -> &OnuRecord {
        &self.record
    }

    /// The action currently in flight, if any.
    pub fn action_in_flight(&self) -> Option<ActionKind> {
        self.action
    }

    /// Reboot the ONU. Requires confirmation; completes in place.
    pub async fn reboot(&mut self, confirm: &impl Confirmation) -> Result<ActionOutcome, CoreError> {
        if self.action.is_some() {
            return Ok(ActionOutcome::Busy);
        }
        if !confirm.confirm("Are you sure you want to reboot this ONU?").await {
            return Ok(ActionOutcome::Declined);
        }

        self.action = Some(ActionKind::Reboot);
        let result = self
            .client
            .reboot_onu(self.device_id, self.record.fsp.as_str(), &self.record.ont_id)
            .await;
        self.action = None;

        match result {
            Ok(ack) => Ok(ActionOutcome::Rebooted(
                ack.message.unwrap_or_else(|| "ONU reboot issued".to_owned()),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete the ONU registration. Requires confirmation; on success the
    /// view is no longer valid and the caller should leave it.
    pub async fn delete(&mut self, confirm: &impl Confirmation) -> Result<ActionOutcome, CoreError> {
        if self.action.is_some() {
            return Ok(ActionOutcome::Busy);
        }
        if !confirm.confirm("Are you sure you want to delete this ONU?").await {
            return Ok(ActionOutcome::Declined);
        }

        self.action = Some(ActionKind::Delete);
        let result = self
            .client
            .delete_onu(
                self.device_id,
                self.record.fsp.as_str(),
                &self.record.ont_id,
                &self.record.sn,
                &self.record.description,
            )
            .await;
        self.action = None;

        match result {
            Ok(ack) => Ok(ActionOutcome::Deleted(
                ack.message.unwrap_or_else(|| "ONU deleted successfully".to_owned()),
            )),
            Err(err) => Err(err.into()),
        }
    }

    /// Read the ONU's received optical power (diagnostic readout, no
    /// confirmation needed).
    pub async fn optical(&self) -> Result<OpticalInfo, CoreError> {
        Ok(self
            .client
            .optical_info(self.device_id, self.record.fsp.as_str(), &self.record.ont_id)
            .await?)
    }
}
