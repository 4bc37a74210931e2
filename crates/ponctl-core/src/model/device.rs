// ── Device domain types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Reachability of an OLT device as reported by the status endpoint.
///
/// `Unknown` covers both "not yet polled" and "status fetch failed" --
/// an unreachable management plane is indistinguishable from an
/// unpolled one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeviceStatus {
    Online,
    Offline,
    #[default]
    Unknown,
}

impl DeviceStatus {
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }

    /// Parse a raw status report; anything unrecognized maps to `Unknown`.
    pub fn from_report(raw: &str) -> Self {
        raw.parse().unwrap_or(Self::Unknown)
    }
}

/// An OLT device with its resolved status.
///
/// Status starts `Unknown` and is resolved per device by the
/// [`StatusAggregator`](crate::StatusAggregator); the whole list is
/// replaced on refresh.
#[derive(Debug, Clone, Serialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub ip: String,
    pub status: DeviceStatus,
}

impl From<ponctl_api::Device> for Device {
    fn from(wire: ponctl_api::Device) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            ip: wire.ip,
            status: DeviceStatus::Unknown,
        }
    }
}
