//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// driftctl - deployment plan CLI harness
#[derive(Parser)]
#[command(name = "driftctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan and apply resource deployments against an in-process demo provider")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Global arguments available for all commands
#[derive(Parser)]
pub struct GlobalArgs {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use alternate config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Diff two snapshots and print the resulting step order (dry run)
    Plan {
        /// Path to the old (actual-state) snapshot, JSON
        #[arg(long, value_name = "PATH")]
        old: Option<PathBuf>,

        /// Path to the new (desired-state) snapshot, JSON
        #[arg(long, value_name = "PATH")]
        new: Option<PathBuf>,
    },

    /// Plan, then execute against the in-process demo provider
    Apply {
        /// Path to the old (actual-state) snapshot, JSON
        #[arg(long, value_name = "PATH")]
        old: Option<PathBuf>,

        /// Path to the new (desired-state) snapshot, JSON
        #[arg(long, value_name = "PATH")]
        new: Option<PathBuf>,
    },
}

impl Commands {
    /// Command name, for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Plan { .. } => "plan",
            Commands::Apply { .. } => "apply",
        }
    }

    #[must_use]
    pub fn old_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Plan { old, .. } | Commands::Apply { old, .. } => old.as_ref(),
        }
    }

    #[must_use]
    pub fn new_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Plan { new, .. } | Commands::Apply { new, .. } => new.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plan_with_both_paths() {
        let cli = Cli::parse_from(["driftctl", "plan", "--old", "a.json", "--new", "b.json"]);
        assert_eq!(cli.command.name(), "plan");
        assert_eq!(cli.command.old_path(), Some(&PathBuf::from("a.json")));
        assert_eq!(cli.command.new_path(), Some(&PathBuf::from("b.json")));
    }

    #[test]
    fn apply_allows_omitted_old_for_create_only() {
        let cli = Cli::parse_from(["driftctl", "apply", "--new", "b.json"]);
        assert_eq!(cli.command.name(), "apply");
        assert!(cli.command.old_path().is_none());
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::parse_from(["driftctl", "--json", "--debug", "plan"]);
        assert!(cli.global.json);
        assert!(cli.global.debug);
    }
}
