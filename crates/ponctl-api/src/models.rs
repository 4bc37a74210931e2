// Wire types for the management backend's JSON API.
//
// Field names mirror the backend exactly (`FSP`, `SN`, `ONTID`, ...);
// serde rename attributes keep the Rust side idiomatic. Optional fields
// use `#[serde(default)]` because field presence varies between the
// autofind and search result shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// OLT device row from `GET /device`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: u64,
    pub name: String,
    pub ip: String,
}

/// Body of `GET /device/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct DeviceStatusResponse {
    pub status: String,
}

/// A registered or discovered ONU as the backend reports it.
///
/// Search results carry the full shape; autofind rows only `FSP` + `SN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnuRecord {
    #[serde(rename = "FSP")]
    pub fsp: String,
    #[serde(rename = "SN")]
    pub sn: String,
    /// Some firmware versions report the ONT id as a JSON number.
    #[serde(rename = "ONTID", default, deserialize_with = "string_or_number")]
    pub ont_id: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "VendorSN", default)]
    pub vendor_sn: Option<String>,
    #[serde(rename = "LineProfile", default)]
    pub line_profile: Option<String>,
    #[serde(rename = "Lastdowncause", default)]
    pub last_down_cause: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Outcome of `POST /device/{id}/onu/search/sn`.
///
/// The backend signals "no such ONU" with a structured `{"detail": ...}`
/// body and HTTP 200 -- a normal outcome, not an error. The variant order
/// matters: the sentinel must be tried before the full record shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OnuLookup {
    NotFound { detail: String },
    Found(OnuRecord),
}

/// Unregistered ONU reported by the device-side autofind scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutofindOnu {
    #[serde(rename = "FSP")]
    pub fsp: String,
    #[serde(rename = "SN")]
    pub sn: String,
}

/// VLAN service row from `GET /device/{id}/services`.
///
/// Service id `0` is reserved for the native VLAN and never appears
/// in the fetched list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub vlan: u16,
}

/// Request body for `POST /device/{id}/onu/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionPayload {
    #[serde(rename = "SN")]
    pub sn: String,
    #[serde(rename = "FSP")]
    pub fsp: String,
    pub interface: String,
    pub port: String,
    pub service_id: u32,
    pub description: String,
    pub nativevlan: bool,
}

/// Generic `{"message": ...}` acknowledgement from mutation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Optical power readout from `POST /device/{id}/onu/optical`.
#[derive(Debug, Clone, Deserialize)]
pub struct OpticalInfo {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "ONU_RX", default)]
    pub onu_rx: Option<f64>,
}

/// Accept a JSON string or number, normalizing to `String`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Num(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Num(n) => n.to_string(),
    })
}
