//! Device command handlers.

use std::sync::Arc;

use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tabled::Tabled;

use ponctl_api::{ApiClient, Service};
use ponctl_core::{CoreError, Device, DeviceStatus, StatusAggregator};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            ip: d.ip.clone(),
            status: d.status.to_string(),
        }
    }
}

#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service ID")]
    id: u32,
    #[tabled(rename = "VLAN")]
    vlan: u16,
}

fn colored_status(status: DeviceStatus, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match status {
        DeviceStatus::Online => status.green().to_string(),
        DeviceStatus::Offline => status.red().to_string(),
        DeviceStatus::Unknown => status.dimmed().to_string(),
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: Arc<ApiClient>,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DevicesCommand::List => {
            let mut aggregator = StatusAggregator::new(client);

            // Spinner only when a human is watching a table render.
            let spinner = if matches!(global.output, OutputFormat::Table) && !global.quiet {
                let pb = ProgressBar::new_spinner();
                pb.set_message("Resolving device status...");
                Some(pb)
            } else {
                None
            };

            let devices = aggregator
                .refresh_with_progress(|_, device| {
                    if let Some(ref pb) = spinner {
                        pb.set_message(format!("{}: {}", device.name, device.status));
                        pb.tick();
                    }
                })
                .await?;

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            let out = output::render_list(
                &global.output,
                &devices,
                |d| DeviceRow::from(d),
                |d| d.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DevicesCommand::Status { device } => {
            let device = util::resolve_device(&client, &device).await?;
            let status = match client.device_status(device.id).await {
                Ok(raw) => DeviceStatus::from_report(&raw),
                Err(err) => {
                    tracing::warn!(device_id = device.id, error = %err, "status fetch failed");
                    DeviceStatus::Unknown
                }
            };

            let color = output::should_color(&global.color);
            let line = format!(
                "{} ({}): {}",
                device.name,
                device.ip,
                colored_status(status, color)
            );
            output::print_output(&line, global.quiet);
            Ok(())
        }

        DevicesCommand::Services { device } => {
            let device = util::resolve_device(&client, &device).await?;
            let services: Vec<Service> = client
                .device_services(device.id)
                .await
                .map_err(CoreError::from)?;

            let out = output::render_list(
                &global.output,
                &services,
                |s| ServiceRow {
                    id: s.id,
                    vlan: s.vlan,
                },
                |s| s.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
