//! ONU command handlers: discovery, provisioning, lifecycle.

use std::sync::Arc;

use tabled::Tabled;

use ponctl_api::ApiClient;
use ponctl_core::{
    ActionOutcome, DiscoveryController, OnuRecord, OnuView, ProvisionWorkflow, SubmitOutcome,
};

use crate::cli::{AddArgs, GlobalOpts, OnuArgs, OnuCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct OnuRow {
    #[tabled(rename = "FSP")]
    fsp: String,
    #[tabled(rename = "ONTID")]
    ont_id: String,
    #[tabled(rename = "SN")]
    sn: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&OnuRecord> for OnuRow {
    fn from(record: &OnuRecord) -> Self {
        Self {
            fsp: record.fsp.to_string(),
            ont_id: record.ont_id.clone(),
            sn: record.sn.clone(),
            description: record.description.clone(),
        }
    }
}

fn detail(record: &OnuRecord) -> String {
    [
        format!("SN:             {}", record.sn),
        format!("FSP:            {}", record.fsp),
        format!("ONT ID:         {}", record.ont_id),
        format!("Description:    {}", record.description),
        format!(
            "Status:         {}",
            record.status.as_deref().unwrap_or("-")
        ),
        format!(
            "Vendor SN:      {}",
            record.vendor_sn.as_deref().unwrap_or("-")
        ),
        format!(
            "Line Profile:   {}",
            record.line_profile.as_deref().unwrap_or("-")
        ),
        format!(
            "Last Down Cause: {}",
            record.last_down_cause.as_deref().unwrap_or("-")
        ),
    ]
    .join("\n")
}

fn print_rows(rows: &[OnuRecord], global: &GlobalOpts) {
    if rows.is_empty() {
        if !global.quiet {
            eprintln!("No ONUs found.");
        }
        return;
    }
    let out = output::render_list(&global.output, rows, |r| OnuRow::from(r), |r| r.sn.clone());
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: Arc<ApiClient>,
    args: OnuArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        OnuCommand::Autofind { device } => {
            let device = util::resolve_device(&client, &device).await?;
            let mut discovery = DiscoveryController::new(client);
            let results = discovery.autofind(device.id).await;
            print_rows(results.rows(), global);
            Ok(())
        }

        OnuCommand::Search { query } => {
            let mut discovery = DiscoveryController::new(client);
            let results = discovery.search(&query).await;
            print_rows(results.rows(), global);
            Ok(())
        }

        OnuCommand::Show {
            device,
            sn,
            optical,
        } => {
            let device = util::resolve_device(&client, &device).await?;
            let view = OnuView::load(Arc::clone(&client), device.id, &sn).await?;

            let out = output::render_single(&global.output, view.record(), detail, |r| {
                r.sn.clone()
            });
            output::print_output(&out, global.quiet);

            if optical {
                let readout = view.optical().await?;
                let rx = readout
                    .onu_rx
                    .map_or_else(|| "-".to_owned(), |v| format!("{v:.2} dBm"));
                output::print_output(&format!("RX power:       {rx}"), global.quiet);
            }
            Ok(())
        }

        OnuCommand::Add(add) => handle_add(client, add, global).await,

        OnuCommand::Reboot { device, sn } => {
            let device = util::resolve_device(&client, &device).await?;
            let mut view = OnuView::load(Arc::clone(&client), device.id, &sn).await?;

            let confirm = util::PromptConfirmation::new(global.yes);
            match view.reboot(&confirm).await? {
                ActionOutcome::Rebooted(message) => {
                    if !global.quiet {
                        eprintln!("{message}");
                    }
                }
                ActionOutcome::Declined => {
                    if !global.quiet {
                        eprintln!("Aborted.");
                    }
                }
                ActionOutcome::Busy | ActionOutcome::Deleted(_) => {}
            }
            Ok(())
        }

        OnuCommand::Delete { device, sn } => {
            let device = util::resolve_device(&client, &device).await?;
            let mut view = OnuView::load(Arc::clone(&client), device.id, &sn).await?;

            let confirm = util::PromptConfirmation::new(global.yes);
            match view.delete(&confirm).await? {
                ActionOutcome::Deleted(message) => {
                    if !global.quiet {
                        eprintln!("{message}");
                    }
                }
                ActionOutcome::Declined => {
                    if !global.quiet {
                        eprintln!("Aborted.");
                    }
                }
                ActionOutcome::Busy | ActionOutcome::Rebooted(_) => {}
            }
            Ok(())
        }
    }
}

// ── Provisioning ────────────────────────────────────────────────────

async fn handle_add(
    client: Arc<ApiClient>,
    add: AddArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let device = util::resolve_device(&client, &add.device).await?;

    let mut source = OnuRecord::discovered(add.fsp.clone(), add.sn.clone());
    if let Some(ref description) = add.description {
        source.description = description.clone();
    }

    let mut workflow = ProvisionWorkflow::new(Arc::clone(&client), device.id, source);

    workflow.check().await?;
    if let Some(existing) = workflow.existing() {
        if !global.quiet {
            eprintln!(
                "SN {} is already registered at {} (ONT {}).",
                existing.sn, existing.fsp, existing.ont_id
            );
        }
    }

    workflow.load_services().await;
    if add.native_vlan {
        workflow.set_native_vlan(true);
    } else if let Some(service_id) = add.service {
        workflow.select_service(service_id)?;
    }
    if let Some(description) = add.description {
        // Explicit flag wins over the seeded default.
        workflow.set_description(description);
    }

    let confirm = util::PromptConfirmation::new(global.yes);
    match workflow.submit(&confirm).await? {
        SubmitOutcome::Provisioned(message) => {
            if !global.quiet {
                eprintln!("{message}");
            }
            Ok(())
        }
        SubmitOutcome::Cancelled => {
            if !global.quiet {
                eprintln!("Cancelled -- existing registration kept.");
            }
            Ok(())
        }
        SubmitOutcome::NotReady => Err(CliError::ApiError {
            message: "provisioning workflow was not ready to submit".into(),
            status: None,
        }),
    }
}
