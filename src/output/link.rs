//! Web UI deep links

use crate::config::links;

/// Where the records were fetched from
#[derive(Debug, Clone, Copy)]
pub struct Site<'a> {
    /// Bare TFE hostname (no scheme)
    pub address: &'a str,
    /// Organization the records belong to
    pub organization: &'a str,
}

/// Build a link to a workspace-scoped resource page
///
/// Shape: `https://{address}/app/{organization}/workspaces/{workspace}/{resource_path}/{id}`
pub fn deep_link(site: &Site, workspace: &str, resource_path: &str, id: &str) -> String {
    format!(
        "https://{}/{}/{}/workspaces/{}/{}/{}",
        site.address,
        links::APP,
        site.organization,
        workspace,
        resource_path,
        id
    )
}
