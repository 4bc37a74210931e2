//! Canonical domain types.
//!
//! Wire shapes from `ponctl-api` are normalized here: heterogeneous
//! discovery results become a single [`OnuRecord`] shape, raw status
//! strings become [`DeviceStatus`], and slot paths get a fallible
//! interface/port decomposition.

mod device;
mod onu;
mod slot_path;

pub use device::{Device, DeviceStatus};
pub use onu::{NOT_AVAILABLE, OnuRecord};
pub use slot_path::{SlotPath, SlotPathError};
