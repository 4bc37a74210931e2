// ONU endpoints
//
// Discovery (autofind scan, free-text search), SN lookup, provisioning,
// and lifecycle commands (reboot, delete, optical readout).

use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{ActionMessage, AutofindOnu, OnuLookup, OnuRecord, OpticalInfo, ProvisionPayload};

impl ApiClient {
    /// Look up an ONU registration by serial number on a specific device.
    ///
    /// `POST /device/{id}/onu/search/sn` with `{ "sn": ... }`.
    ///
    /// "No such ONU" is a structured `{"detail": ...}` body, decoded as
    /// [`OnuLookup::NotFound`] -- callers must treat it as a normal
    /// outcome, not a failure.
    pub async fn find_onu_by_sn(&self, device_id: u64, sn: &str) -> Result<OnuLookup, Error> {
        let url = self.url(&format!("device/{device_id}/onu/search/sn"));
        debug!(device_id, sn, "looking up ONU by SN");
        self.post(url, &json!({ "sn": sn })).await
    }

    /// Run the device-side autofind scan for unregistered ONUs.
    ///
    /// `GET /device/{id}/onu/autofind` -- rows carry only `FSP` + `SN`.
    pub async fn autofind_onus(&self, device_id: u64) -> Result<Vec<AutofindOnu>, Error> {
        let url = self.url(&format!("device/{device_id}/onu/autofind"));
        debug!(device_id, "running autofind scan");
        self.get(url).await
    }

    /// Search registered ONUs by serial number or description.
    ///
    /// `GET /onu/search?query=...` -- an empty query is a valid request
    /// (the backend returns its full result set), so it is dispatched
    /// rather than short-circuited client-side.
    pub async fn search_onus(&self, query: &str) -> Result<Vec<OnuRecord>, Error> {
        let url = self.url("onu/search");
        debug!(query, "searching ONUs");
        self.get_query(url, &[("query", query)]).await
    }

    /// Provision an ONU on a device.
    ///
    /// `POST /device/{id}/onu/add`
    pub async fn add_onu(
        &self,
        device_id: u64,
        payload: &ProvisionPayload,
    ) -> Result<ActionMessage, Error> {
        let url = self.url(&format!("device/{device_id}/onu/add"));
        debug!(device_id, sn = %payload.sn, "provisioning ONU");
        self.post(url, payload).await
    }

    /// Delete an ONU registration.
    ///
    /// `DELETE /device/{id}/onu/delete` with the addressing fields in the
    /// JSON body.
    pub async fn delete_onu(
        &self,
        device_id: u64,
        fsp: &str,
        ont_id: &str,
        sn: &str,
        description: &str,
    ) -> Result<ActionMessage, Error> {
        let url = self.url(&format!("device/{device_id}/onu/delete"));
        debug!(device_id, sn, "deleting ONU");
        self.delete(
            url,
            &json!({
                "FSP": fsp,
                "ONTID": ont_id,
                "SN": sn,
                "Description": description,
            }),
        )
        .await
    }

    /// Reboot an ONU.
    ///
    /// `POST /device/{id}/onu/reset`
    pub async fn reboot_onu(
        &self,
        device_id: u64,
        fsp: &str,
        ont_id: &str,
    ) -> Result<ActionMessage, Error> {
        let url = self.url(&format!("device/{device_id}/onu/reset"));
        debug!(device_id, fsp, ont_id, "rebooting ONU");
        self.post(url, &json!({ "FSP": fsp, "ONTID": ont_id })).await
    }

    /// Read the ONU's received optical power.
    ///
    /// `POST /device/{id}/onu/optical`
    pub async fn optical_info(
        &self,
        device_id: u64,
        fsp: &str,
        ont_id: &str,
    ) -> Result<OpticalInfo, Error> {
        let url = self.url(&format!("device/{device_id}/onu/optical"));
        debug!(device_id, fsp, ont_id, "reading optical power");
        self.post(url, &json!({ "FSP": fsp, "ONTID": ont_id })).await
    }
}
