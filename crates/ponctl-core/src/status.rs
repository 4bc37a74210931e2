// ── Device status aggregation ──
//
// One aggregation episode: fetch the device list, then resolve each
// device's status with its own call. Fetches are issued sequentially;
// a failed fetch resolves that device to `Unknown` and the remaining
// devices still resolve. There is no per-device retry -- a failed
// device reports `Unknown` until the next full refresh.

use std::sync::Arc;

use tracing::{debug, warn};

use ponctl_api::ApiClient;

use crate::error::CoreError;
use crate::model::{Device, DeviceStatus};

/// Aggregates per-device reachability across the full device list.
///
/// The loading flag covers the whole episode -- the list fetch and every
/// per-device status call -- and only clears after the last device
/// resolves. Every device returned by the list call appears in the
/// result with *some* status, failures included.
pub struct StatusAggregator {
    client: Arc<ApiClient>,
    loading: bool,
}

impl StatusAggregator {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            loading: false,
        }
    }

    /// Whether an aggregation episode is in progress.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Run a full aggregation episode.
    ///
    /// Only the initial list fetch can fail the episode; per-device
    /// status failures are isolated to `Unknown`.
    pub async fn refresh(&mut self) -> Result<Vec<Device>, CoreError> {
        self.refresh_with_progress(|_, _| {}).await
    }

    /// Like [`refresh`](Self::refresh), invoking `on_progress` after each
    /// device resolves (for progress rendering).
    pub async fn refresh_with_progress(
        &mut self,
        on_progress: impl FnMut(usize, &Device),
    ) -> Result<Vec<Device>, CoreError> {
        self.loading = true;
        let result = self.resolve_all(on_progress).await;
        self.loading = false;
        result
    }

    async fn resolve_all(
        &self,
        mut on_progress: impl FnMut(usize, &Device),
    ) -> Result<Vec<Device>, CoreError> {
        let listed = self.client.list_devices().await?;
        let mut devices: Vec<Device> = listed.into_iter().map(Device::from).collect();
        debug!(count = devices.len(), "resolving device statuses");

        for (idx, device) in devices.iter_mut().enumerate() {
            device.status = match self.client.device_status(device.id).await {
                Ok(raw) => DeviceStatus::from_report(&raw),
                Err(err) => {
                    warn!(device_id = device.id, error = %err, "status fetch failed; reporting unknown");
                    DeviceStatus::Unknown
                }
            };
            on_progress(idx, device);
        }

        Ok(devices)
    }
}
