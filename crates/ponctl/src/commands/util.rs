//! Shared helpers for command handlers.

use std::sync::Arc;

use ponctl_api::ApiClient;
use ponctl_core::{Confirmation, Device};

use crate::error::CliError;

/// Resolve a device identifier (numeric id or name) via the device list.
pub async fn resolve_device(client: &Arc<ApiClient>, identifier: &str) -> Result<Device, CliError> {
    let devices = client
        .list_devices()
        .await
        .map_err(ponctl_core::CoreError::from)?;

    for device in devices {
        if device.id.to_string() == identifier || device.name == identifier {
            return Ok(Device::from(device));
        }
    }

    Err(CliError::NotFound {
        resource_type: "device".into(),
        identifier: identifier.into(),
        list_command: "devices list".into(),
    })
}

/// Terminal-backed [`Confirmation`]: prompts via dialoguer, auto-approving
/// when `--yes` was passed. A prompt that cannot be shown (no TTY) counts
/// as declined.
pub struct PromptConfirmation {
    assume_yes: bool,
}

impl PromptConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmation for PromptConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}
