//! Clap derive structures for the `aos-sw` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// aos-sw -- manage ArubaOS-Switch devices from the command line
#[derive(Debug, Parser)]
#[command(
    name = "aos-sw",
    version,
    about = "Manage ArubaOS-Switch devices over the REST API",
    long_about = "Query and configure ArubaOS-Switch devices through their REST API.\n\n\
        Every command opens one session, runs, and logs out again.",
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
    /// Switch profile to use
    #[arg(long, short = 'p', env = "AOS_SW_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Switch host or IP (overrides profile)
    #[arg(long, short = 'H', env = "AOS_SW_HOST", global = true)]
    pub host: Option<String>,

    /// Login user name (overrides profile)
    #[arg(long, short = 'u', env = "AOS_SW_USERNAME", global = true)]
    pub username: Option<String>,

    /// REST API version (overrides profile)
    #[arg(long, env = "AOS_SW_API_VERSION", global = true)]
    pub api_version: Option<u32>,

    /// Use plain HTTP instead of HTTPS
    #[arg(long, global = true)]
    pub http: bool,

    /// Verify the switch certificate against the system trust store
    #[arg(long, env = "AOS_SW_VERIFY_TLS", global = true)]
    pub verify_tls: bool,

    /// Leave the session open on the switch when done
    #[arg(long, global = true)]
    pub keep_session: bool,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "AOS_SW_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation for destructive operations
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "AOS_SW_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

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

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Device identity and status
    #[command(alias = "sys")]
    System(SystemArgs),

    /// Manage VLANs
    #[command(alias = "vlan")]
    Vlans(VlansArgs),

    /// Inspect physical ports
    #[command(alias = "port")]
    Ports(PortsArgs),

    /// Power over Ethernet per port
    Poe(PoeArgs),

    /// List installed transceivers
    Transceivers,

    /// Show learned MAC addresses
    MacTable(MacTableArgs),

    /// Run a CLI command on the switch
    Cli(CliCommandArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── System ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommand,
}

#[derive(Debug, Subcommand)]
pub enum SystemCommand {
    /// Name, location and contact
    Info,
    /// Model, serial number and firmware
    Status,
}

// ── VLANs ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VlansArgs {
    #[command(subcommand)]
    pub command: VlansCommand,
}

#[derive(Debug, Subcommand)]
pub enum VlansCommand {
    /// List all VLANs
    #[command(alias = "ls")]
    List,

    /// Show one VLAN
    Get {
        /// VLAN ID (1-4094)
        id: u16,
    },

    /// Create a VLAN
    Create {
        /// VLAN ID (1-4094)
        id: u16,

        /// VLAN name
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Delete a VLAN
    #[command(alias = "rm")]
    Delete {
        /// VLAN ID (1-4094)
        id: u16,
    },
}

// ── Ports ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PortsArgs {
    #[command(subcommand)]
    pub command: PortsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PortsCommand {
    /// List all ports
    #[command(alias = "ls")]
    List,

    /// Show one port
    Get {
        /// Port ID (e.g. 1, A1, 1/1)
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct PoeArgs {
    #[command(subcommand)]
    pub command: PoeCommand,
}

#[derive(Debug, Subcommand)]
pub enum PoeCommand {
    /// PoE settings of every port
    #[command(alias = "ls")]
    List,
}

// ── MAC table ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct MacTableArgs {
    /// Only entries learned on this VLAN
    #[arg(long, conflicts_with = "port")]
    pub vlan: Option<u16>,

    /// Only entries learned on this port
    #[arg(long)]
    pub port: Option<String>,
}

// ── CLI passthrough ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CliCommandArgs {
    /// Command to run, e.g. "show version"
    #[arg(required = true, num_args = 1..)]
    pub command: Vec<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the current configuration (secrets redacted)
    Show,

    /// Store a profile's password in the system keyring (read from stdin)
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
