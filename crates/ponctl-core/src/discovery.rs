// ── ONU discovery ──
//
// Two mutually exclusive discovery modes share one result slot. Starting
// either mode replaces the slot with its own (initially empty) variant,
// so rows from the other mode disappear immediately -- not after the new
// response lands. Discovery failures resolve to an empty result set and
// are logged only: the operation is routinely retried by the technician,
// so it does not warrant a hard error surface.

use std::sync::Arc;

use tracing::{debug, warn};

use ponctl_api::ApiClient;

use crate::model::OnuRecord;

/// The single discovery result slot.
///
/// Replaced atomically as a whole -- there is no state in which autofind
/// and search rows are visible at the same time.
#[derive(Debug, Clone, Default)]
pub enum DiscoveryResults {
    #[default]
    Empty,
    Autofind(Vec<OnuRecord>),
    Search(Vec<OnuRecord>),
}

impl DiscoveryResults {
    /// The rows of whichever mode currently owns the slot.
    pub fn rows(&self) -> &[OnuRecord] {
        match self {
            Self::Empty => &[],
            Self::Autofind(rows) | Self::Search(rows) => rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Runs autofind scans and registered-ONU searches for one selected device
/// context, normalizing both result shapes into [`OnuRecord`] rows.
pub struct DiscoveryController {
    client: Arc<ApiClient>,
    results: DiscoveryResults,
    autofind_loading: bool,
    search_loading: bool,
    /// Monotonic request token: a response is only committed if no newer
    /// operation started while it was in flight.
    seq: u64,
}

impl DiscoveryController {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            results: DiscoveryResults::Empty,
            autofind_loading: false,
            search_loading: false,
            seq: 0,
        }
    }

    pub fn results(&self) -> &DiscoveryResults {
        &self.results
    }

    pub fn autofind_loading(&self) -> bool {
        self.autofind_loading
    }

    pub fn search_loading(&self) -> bool {
        self.search_loading
    }

    /// Run the device-side autofind scan for unregistered ONUs.
    ///
    /// Rows carry only FSP + SN; the remaining fields are filled with the
    /// "not available" sentinel so consumers see the full record shape.
    pub async fn autofind(&mut self, device_id: u64) -> &DiscoveryResults {
        let token = self.begin();
        self.autofind_loading = true;

        let rows = match self.client.autofind_onus(device_id).await {
            Ok(found) => found.into_iter().map(OnuRecord::from).collect(),
            Err(err) => {
                warn!(device_id, error = %err, "autofind failed");
                Vec::new()
            }
        };

        self.autofind_loading = false;
        self.commit(token, DiscoveryResults::Autofind(rows));
        &self.results
    }

    /// Search registered ONUs by serial number or description.
    ///
    /// An empty query is dispatched as-is -- the backend treats it as
    /// "match everything".
    pub async fn search(&mut self, query: &str) -> &DiscoveryResults {
        let token = self.begin();
        self.search_loading = true;

        let rows = match self.client.search_onus(query).await {
            Ok(found) => found.into_iter().map(OnuRecord::from).collect(),
            Err(err) => {
                warn!(query, error = %err, "search failed");
                Vec::new()
            }
        };

        self.search_loading = false;
        self.commit(token, DiscoveryResults::Search(rows));
        &self.results
    }

    /// Start a new operation: bump the token and clear the slot so the
    /// other mode's rows vanish before the network call is issued.
    fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.results = DiscoveryResults::Empty;
        self.seq
    }

    /// Commit a response unless a newer operation superseded it.
    fn commit(&mut self, token: u64, results: DiscoveryResults) {
        if token == self.seq {
            self.results = results;
        } else {
            debug!(token, current = self.seq, "discarding stale discovery response");
        }
    }
}
