//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use herald_core::domain::Channel as CoreChannel;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "herald",
    bin_name = "herald",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4ec} Notification dispatch with swappable channels",
    long_about = "Herald formats a notification, dispatches it through a \
                  pluggable delivery channel, and records the event.",
    after_help = "EXAMPLES:\n\
        \x20 herald send John \"Your order has been shipped!\"\n\
        \x20 herald send Alice \"Your appointment is confirmed!\" --channel sms\n\
        \x20 herald channels --format json\n\
        \x20 herald completions bash > /usr/share/bash-completion/completions/herald",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send one notification.
    #[command(
        visible_alias = "s",
        about = "Send a notification",
        after_help = "EXAMPLES:\n\
            \x20 herald send John \"Your order has been shipped!\"\n\
            \x20 herald send Alice \"Your appointment is confirmed!\" -c sms"
    )]
    Send(SendArgs),

    /// Run the built-in demonstration scenarios.
    #[command(
        about = "Run the two built-in scenarios (email, then sms)",
        after_help = "Sends a fixed order notification via email and a fixed \
                      appointment notification via sms, using the same \
                      service wiring as `herald send`."
    )]
    Demo,

    /// List available delivery channels.
    #[command(
        visible_alias = "ls",
        about = "List available channels",
        after_help = "EXAMPLES:\n\
            \x20 herald channels\n\
            \x20 herald channels --format json"
    )]
    Channels(ChannelsArgs),

    /// Initialise a Herald configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 herald init           # default (user config dir)\n\
            \x20 herald init --local   # .herald.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 herald completions bash > ~/.local/share/bash-completion/completions/herald\n\
            \x20 herald completions zsh  > ~/.zfunc/_herald\n\
            \x20 herald completions fish > ~/.config/fish/completions/herald.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Herald configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 herald config get defaults.channel\n\
            \x20 herald config set defaults.channel sms\n\
            \x20 herald config list"
    )]
    Config(ConfigCommands),
}

// ── send ──────────────────────────────────────────────────────────────────────

/// Arguments for `herald send`.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Who the notification is addressed to.
    #[arg(value_name = "RECIPIENT", help = "Notification recipient")]
    pub recipient: String,

    /// The notification body appended to the greeting.
    #[arg(value_name = "CONTENT", help = "Notification content")]
    pub content: String,

    /// Delivery channel.  Falls back to `defaults.channel` from the
    /// configuration, then to email.
    #[arg(
        short = 'c',
        long = "channel",
        value_name = "CHANNEL",
        value_enum,
        help = "Delivery channel"
    )]
    pub channel: Option<ChannelArg>,
}

// ── channels ──────────────────────────────────────────────────────────────────

/// Arguments for `herald channels`.
#[derive(Debug, Args)]
pub struct ChannelsArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ChannelsFormat,
}

/// Output format for the `channels` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChannelsFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `herald init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.herald.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `herald completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `herald config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.channel`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Delivery channels accepted on the command line.
///
/// Mirrors `herald_core::domain::Channel`; the CLI keeps its own enum so
/// that clap attributes never leak into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ChannelArg {
    Email,
    Sms,
}

impl From<ChannelArg> for CoreChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Email => CoreChannel::Email,
            ChannelArg::Sms => CoreChannel::Sms,
        }
    }
}

impl std::fmt::Display for ChannelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
