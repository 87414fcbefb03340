//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Kriya session planner.
///
/// Suggests combinations of learned practices that fit into the time you
/// have available.
#[derive(Debug, Parser)]
#[command(name = "kt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest sessions that fit into the available time.
    Suggest {
        /// Available minutes. Non-numeric input counts as 0.
        ///
        /// Defaults to `available_time` from the config.
        minutes: Option<String>,

        #[command(flatten)]
        what_if: WhatIf,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the practice catalogue in order.
    Practices {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Catalogue adjustments applied to a single `suggest` run.
///
/// Nothing here is saved; the config stays as it is.
#[derive(Debug, Default, Args)]
pub struct WhatIf {
    /// Flip the learned mark of a practice.
    #[arg(long = "toggle", value_name = "ID")]
    pub toggle: Vec<String>,

    /// Move a practice one slot earlier in the order.
    #[arg(long = "move-up", value_name = "ID")]
    pub move_up: Vec<String>,

    /// Move a practice one slot later in the order.
    #[arg(long = "move-down", value_name = "ID")]
    pub move_down: Vec<String>,

    /// Leave out custom, imported and manually added practices.
    #[arg(long)]
    pub builtin_only: bool,
}
