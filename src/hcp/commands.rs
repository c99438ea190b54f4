//! List command pipeline shared by every resource kind

use log::{debug, info};

use crate::cli::{Cli, Command, ListArgs, OutputFormat, RunCommand, WorkspaceCommand};
use crate::error::Result;
use crate::hcp::traits::Fetch;
use crate::hcp::{HostResolver, Run, TeamAccess, TfeClient, TokenResolver, WorkspaceVariable};
use crate::output::{render, Listing, Site};
use crate::ui::{clear_spinner, create_spinner};

/// Run the selected command and print its output
pub async fn run_command(cli: &Cli) -> Result<()> {
    let output = match &cli.command {
        Command::Run {
            command: RunCommand::List(args),
        } => run_list_command::<Run>(args, cli.batch).await?,
        Command::Workspace {
            command: WorkspaceCommand::Accesses(args),
        } => run_list_command::<TeamAccess>(args, cli.batch).await?,
        Command::Workspace {
            command: WorkspaceCommand::Variables(args),
        } => run_list_command::<WorkspaceVariable>(args, cli.batch).await?,
    };

    println!("{}", output);
    Ok(())
}

/// Resolve format and credentials, fetch, and render one listing
///
/// The format is checked before anything touches the network.
pub async fn run_list_command<R>(args: &ListArgs, batch: bool) -> Result<String>
where
    R: Fetch + Listing,
{
    let format = OutputFormat::resolve(args.output.as_deref(), R::DEFAULT_FORMAT, R::FORMATS)?;
    debug!(
        "Listing {} for org '{}' as {}",
        R::KIND,
        args.organization,
        format
    );

    let host = HostResolver::resolve(args.address.as_deref());
    let token = TokenResolver::new(&host).resolve(args.token.as_deref())?;
    let client = TfeClient::new(token, host)?;

    fetch_and_render::<R>(&client, &args.organization, format, batch).await
}

/// Fetch every record of kind `R` in `org` and render them in `format`
pub async fn fetch_and_render<R>(
    client: &TfeClient,
    org: &str,
    format: OutputFormat,
    batch: bool,
) -> Result<String>
where
    R: Fetch + Listing,
{
    let spinner = create_spinner(&format!("Fetching {} for '{}'...", R::KIND, org), batch);
    let fetched = R::fetch(client, org).await;
    clear_spinner(spinner);
    let records = fetched?;

    info!("Fetched {} {} for '{}'", records.len(), R::KIND, org);

    let site = Site {
        address: client.host(),
        organization: org,
    };
    render(&records, format, &site)
}
