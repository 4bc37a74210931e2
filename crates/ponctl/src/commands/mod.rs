//! Command handlers.

pub mod config_cmd;
pub mod devices;
pub mod onu;
pub mod util;

use std::sync::Arc;

use ponctl_api::ApiClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a parsed command to its handler.
///
/// `Config` and `Completions` are handled before a session exists and
/// never reach this function.
pub async fn dispatch(
    command: Command,
    client: Arc<ApiClient>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        Command::Devices(args) => devices::handle(client, args, global).await,
        Command::Onu(args) => onu::handle(client, args, global).await,
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}
