/// Configuration constants for TFE API
pub mod api {
    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Workspaces endpoint
    pub const WORKSPACES: &str = "workspaces";

    /// Team workspace access endpoint
    pub const TEAM_WORKSPACES: &str = "team-workspaces";

    /// Workspace variables endpoint (nested under a workspace)
    pub const VARS: &str = "vars";

    /// Default page size for API requests
    pub const DEFAULT_PAGE_SIZE: u32 = 100;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name (relative to the config dir on Windows)
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["TFE_TOKEN", "TFC_TOKEN", "HCP_TOKEN"];
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable for the TFE hostname
    pub const ENV_VAR: &str = "TFE_HOSTNAME";
}

/// Path segments of the web UI deep links
pub mod links {
    /// Prefix of every organization-scoped page in the web UI
    pub const APP: &str = "app";

    /// Run detail pages
    pub const RUNS: &str = "runs";

    /// Variable pages
    pub const VARIABLES: &str = "variables";

    /// Team access settings pages
    pub const TEAM_ACCESS: &str = "variables/setting/access";
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
