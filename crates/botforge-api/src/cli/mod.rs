//! CLI command definitions and dispatch for the `bforge` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a verb-noun
//! pattern (e.g., `bforge create bot`, `bforge list bots`).

pub mod bot;
pub mod config;
pub mod plugin;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Manage a workspace of bot instances and their plugins.
#[derive(Parser)]
#[command(name = "bforge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, default_value = "8115", env = "BOTFORGE_PORT")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1", env = "BOTFORGE_BIND")]
        host: String,
    },

    /// Create a new resource.
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// List resources.
    #[command(alias = "ls")]
    List {
        #[command(subcommand)]
        resource: ListResource,
    },

    /// Show details of a bot: manifest, plugins, config.
    Show {
        /// Bot name to display.
        name: String,
    },

    /// Delete a resource.
    #[command(alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },

    /// Manage plugins for a bot.
    Plugin {
        #[command(subcommand)]
        action: PluginCommand,
    },

    /// Manage per-bot configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CreateResource {
    /// Create a new bot workspace.
    Bot {
        /// Bot name (prompted for when omitted).
        #[arg(long)]
        name: Option<String>,

        /// Token written into the default config (prompted for when omitted).
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ListResource {
    /// List all bot workspaces.
    Bots,
}

#[derive(Subcommand)]
pub enum DeleteResource {
    /// Permanently delete a bot workspace, plugins included.
    Bot {
        /// Bot name to delete.
        name: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PluginCommand {
    /// Resolve a plugin through the registry and install it into a bot.
    Add {
        /// Target bot name.
        bot: String,

        /// Plugin name to resolve and install.
        plugin: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Shallow-merge key=value pairs into a bot's config.
    Set {
        /// Target bot name.
        bot: String,

        /// `key=value` pairs; values parse as JSON, falling back to strings.
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}
