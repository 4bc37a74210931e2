// Device endpoints
//
// OLT device listing, per-device status polling, and VLAN service
// catalogs. Status is a separate call per device; the aggregation
// policy (sequential fetch, failure isolation) lives in ponctl-core.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Device, DeviceStatusResponse, Service};

impl ApiClient {
    /// List all registered OLT devices.
    ///
    /// `GET /device`
    pub async fn list_devices(&self) -> Result<Vec<Device>, Error> {
        let url = self.url("device");
        debug!("listing devices");
        self.get(url).await
    }

    /// Fetch the reachability status of a single device.
    ///
    /// `GET /device/{id}/status` -- returns `"online"` or `"offline"`.
    pub async fn device_status(&self, device_id: u64) -> Result<String, Error> {
        let url = self.url(&format!("device/{device_id}/status"));
        let resp: DeviceStatusResponse = self.get(url).await?;
        Ok(resp.status)
    }

    /// List the VLAN services configured on a device.
    ///
    /// `GET /device/{id}/services`
    pub async fn device_services(&self, device_id: u64) -> Result<Vec<Service>, Error> {
        let url = self.url(&format!("device/{device_id}/services"));
        debug!(device_id, "fetching VLAN services");
        self.get(url).await
    }
}
