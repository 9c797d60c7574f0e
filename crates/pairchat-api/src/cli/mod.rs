//! CLI command definitions for the `pchat` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Two-party chat message store.
#[derive(Parser)]
#[command(name = "pchat", version, about, long_about = None)]
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

    /// Path to config.toml (default: <data dir>/config.toml).
    #[arg(long, global = true, env = "PAIRCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Address to bind (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config).
        #[arg(long)]
        port: Option<u16>,

        /// Export spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,

        /// Write log lines as JSON objects.
        #[arg(long)]
        log_json: bool,
    },

    /// Send a message to a chat.
    Send {
        /// Chat handle, e.g. alice:bob.
        chat: String,
        /// Sending participant (must appear in the handle exactly).
        sender: String,
        /// Message text.
        text: String,
    },

    /// Pull one page of a chat.
    Pull {
        /// Chat handle, e.g. alice:bob.
        chat: String,

        /// Position to start from (the previous page's next cursor).
        #[arg(long, allow_hyphen_values = true)]
        cursor: Option<i64>,

        /// Maximum messages in the page.
        #[arg(long, allow_hyphen_values = true)]
        limit: Option<i64>,

        /// Newest first.
        #[arg(long)]
        reverse: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
