//! Clap derive structures for the `ponctl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// ponctl -- field-technician CLI for OLT / ONU management
#[derive(Debug, Parser)]
#[command(
    name = "ponctl",
    version,
    about = "Manage OLT devices and their ONUs from the command line",
    long_about = "A CLI for field technicians working against an OLT management backend:\n\
        list devices and poll their status, discover ONUs (autofind scan or search),\n\
        provision new ONUs with VLAN settings, and reboot or delete registrations.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "PONCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Management backend URL (overrides profile)
    #[arg(long, short = 'b', env = "PONCTL_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Bearer token for the backend session
    #[arg(long, env = "PONCTL_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PONCTL_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PONCTL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PONCTL_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage OLT devices
    #[command(alias = "dev", alias = "d")]
    Devices(DevicesArgs),

    /// Discover, provision, and manage ONUs
    #[command(alias = "o")]
    Onu(OnuArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DEVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DevicesArgs {
    #[command(subcommand)]
    pub command: DevicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DevicesCommand {
    /// List devices with their resolved online/offline status
    #[command(alias = "ls")]
    List,

    /// Poll the status of a single device
    Status {
        /// Device id or name
        device: String,
    },

    /// List the VLAN services configured on a device
    Services {
        /// Device id or name
        device: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ONU
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct OnuArgs {
    #[command(subcommand)]
    pub command: OnuCommand,
}

#[derive(Debug, Subcommand)]
pub enum OnuCommand {
    /// Scan a device for newly attached, unregistered ONUs
    Autofind {
        /// Device id or name
        #[arg(long, short = 'd')]
        device: String,
    },

    /// Search registered ONUs by serial number or description
    Search {
        /// Search query (empty matches everything)
        #[arg(default_value = "")]
        query: String,
    },

    /// Show the detail view of a registered ONU
    Show {
        /// Device id or name
        #[arg(long, short = 'd')]
        device: String,

        /// ONU serial number
        sn: String,

        /// Also read the ONU's received optical power
        #[arg(long)]
        optical: bool,
    },

    /// Provision an ONU (duplicate check, optional overwrite, add)
    Add(AddArgs),

    /// Reboot a registered ONU
    Reboot {
        /// Device id or name
        #[arg(long, short = 'd')]
        device: String,

        /// ONU serial number
        sn: String,
    },

    /// Delete an ONU registration
    #[command(alias = "rm")]
    Delete {
        /// Device id or name
        #[arg(long, short = 'd')]
        device: String,

        /// ONU serial number
        sn: String,
    },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Device id or name
    #[arg(long, short = 'd')]
    pub device: String,

    /// ONU serial number (from a discovery row)
    #[arg(long)]
    pub sn: String,

    /// Slot path of the ONU's attachment point, e.g. 0/1/2
    #[arg(long)]
    pub fsp: String,

    /// VLAN service id to bind (see `devices services`)
    #[arg(long, conflicts_with = "native_vlan")]
    pub service: Option<u32>,

    /// Use the native VLAN instead of a tagged service
    #[arg(long)]
    pub native_vlan: bool,

    /// Description for the new registration
    #[arg(long)]
    pub description: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG / COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactively create a backend profile
    Init,

    /// Show the effective configuration (secrets redacted)
    Show,

    /// Print the config file path
    Path,

    /// Store a bearer token in the system keyring
    SetToken,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
