// ── Slot path (FSP) ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A slot path has fewer than two `/`-separated segments -- there is no
/// safe interface/port split for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed slot path {path:?}: expected at least interface and port segments")]
pub struct SlotPathError {
    pub path: String,
}

/// Frame/slot/port addressing string identifying an ONU's physical
/// attachment point, e.g. `"0/1/2"`.
///
/// Construction is free-form (the backend owns the format); the
/// decomposition into interface and port is fallible via [`split`].
///
/// [`split`]: SlotPath::split
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotPath(String);

impl SlotPath {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decompose into `(interface, port)`: all segments but the last,
    /// joined by `/`, and the last segment.
    ///
    /// `"0/1/2"` → `("0/1", "2")`. Paths with fewer than two segments
    /// are rejected.
    pub fn split(&self) -> Result<(String, String), SlotPathError> {
        let segments: Vec<&str> = self.0.split('/').collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(SlotPathError {
                path: self.0.clone(),
            });
        }
        let (port, interface) = segments.split_last().expect("len checked above");
        Ok((interface.join("/"), (*port).to_owned()))
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for SlotPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SlotPath {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
