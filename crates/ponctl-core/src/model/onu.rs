// ── ONU domain record ──
//
// Both discovery modes produce rows in this shape. Autofind rows only
// carry FSP + SN; the remaining identity fields are synthesized with the
// NOT_AVAILABLE sentinel because downstream rendering and the add
// workflow expect the full record.

use serde::Serialize;

use super::slot_path::SlotPath;

/// Sentinel for fields a discovery mode cannot know yet.
pub const NOT_AVAILABLE: &str = "N/A";

/// A registered or discovered ONU.
#[derive(Debug, Clone, Serialize)]
pub struct OnuRecord {
    pub fsp: SlotPath,
    pub sn: String,
    pub ont_id: String,
    pub description: String,
    pub vendor_sn: Option<String>,
    pub line_profile: Option<String>,
    pub last_down_cause: Option<String>,
    pub status: Option<String>,
}

impl OnuRecord {
    /// Build a record for a newly discovered, unregistered ONU
    /// (only its attachment point and serial number are known).
    pub fn discovered(fsp: impl Into<SlotPath>, sn: impl Into<String>) -> Self {
        Self {
            fsp: fsp.into(),
            sn: sn.into(),
            ont_id: NOT_AVAILABLE.to_owned(),
            description: NOT_AVAILABLE.to_owned(),
            vendor_sn: None,
            line_profile: None,
            last_down_cause: None,
            status: None,
        }
    }
}

impl From<ponctl_api::OnuRecord> for OnuRecord {
    fn from(wire: ponctl_api::OnuRecord) -> Self {
        Self {
            fsp: SlotPath::new(wire.fsp),
            sn: wire.sn,
            ont_id: wire.ont_id,
            description: wire.description,
            vendor_sn: wire.vendor_sn,
            line_profile: wire.line_profile,
            last_down_cause: wire.last_down_cause,
            status: wire.status,
        }
    }
}

impl From<ponctl_api::AutofindOnu> for OnuRecord {
    fn from(wire: ponctl_api::AutofindOnu) -> Self {
        Self::discovered(SlotPath::new(wire.fsp), wire.sn)
    }
}
