//! tfcloud - Main entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use log::{debug, info};

use tfcloud::{run_command, Cli, Command, WorkspaceCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // help and version are printed through the same path
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfcloud v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli.command);

    match run_command(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_config() {
                eprintln!("\n{}", usage(&cli.command));
            }
            ExitCode::FAILURE
        }
    }
}

/// Usage line of the invoked subcommand
fn usage(command: &Command) -> String {
    let path = match command {
        Command::Run { .. } => ["run", "list"],
        Command::Workspace {
            command: WorkspaceCommand::Accesses(_),
        } => ["workspace", "accesses"],
        Command::Workspace {
            command: WorkspaceCommand::Variables(_),
        } => ["workspace", "variables"],
    };

    let mut cmd = Cli::command();
    cmd.build();
    let mut usage = cmd.render_usage().to_string();
    if let Some(sub) = cmd
        .find_subcommand_mut(path[0])
        .and_then(|c| c.find_subcommand_mut(path[1]))
    {
        usage = sub.render_usage().to_string();
    }
    usage
}
