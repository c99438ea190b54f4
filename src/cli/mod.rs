//! CLI argument parsing

mod common;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{ListArgs, OutputFormat};

/// Terraform Cloud listing CLI
#[derive(Parser, Debug)]
#[command(name = "tfcloud")]
#[command(version)]
#[command(
    about = "List Terraform Cloud runs, team accesses and workspace variables",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinner on stderr
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Terraform runs
    #[command(visible_alias = "runs")]
    Run {
        #[command(subcommand)]
        command: RunCommand,
    },

    /// Workspace settings
    #[command(visible_alias = "ws")]
    Workspace {
        #[command(subcommand)]
        command: WorkspaceCommand,
    },
}

/// Run subcommands
#[derive(Subcommand, Debug)]
pub enum RunCommand {
    /// List all current terraform runs
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

/// Workspace subcommands
#[derive(Subcommand, Debug)]
pub enum WorkspaceCommand {
    /// List team accesses of every workspace
    #[command(visible_alias = "team-accesses")]
    Accesses(ListArgs),

    /// List variables of every workspace
    #[command(visible_alias = "vars")]
    Variables(ListArgs),
}

impl Command {
    /// Arguments of the selected listing command
    pub fn list_args(&self) -> &ListArgs {
        match self {
            Command::Run {
                command: RunCommand::List(args),
            } => args,
            Command::Workspace {
                command: WorkspaceCommand::Accesses(args) | WorkspaceCommand::Variables(args),
            } => args,
        }
    }
}
