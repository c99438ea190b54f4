//! Common CLI types shared across listing commands

use clap::Args;

use crate::error::{Result, TfeError};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// JSON array of records
    Json,
    /// Alfred script filter payload
    Alfred,
}

impl OutputFormat {
    /// Every known format, in the order they are listed to users
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Table, OutputFormat::Json, OutputFormat::Alfred];

    /// Keyword accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Alfred => "alfred",
        }
    }

    /// Resolve the active format from a raw flag value
    ///
    /// Missing or empty values fall back to `default`. Keywords are matched
    /// case-sensitively, and a known keyword the command does not list in
    /// `supported` is rejected the same way as an unknown one.
    pub fn resolve(
        raw: Option<&str>,
        default: OutputFormat,
        supported: &[OutputFormat],
    ) -> Result<OutputFormat> {
        let raw = match raw {
            None | Some("") => return Ok(default),
            Some(raw) => raw,
        };

        supported
            .iter()
            .copied()
            .find(|format| format.as_str() == raw)
            .ok_or_else(|| TfeError::Config(invalid_format_message(raw, supported)))
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn invalid_format_message(raw: &str, supported: &[OutputFormat]) -> String {
    let names: Vec<String> = supported.iter().map(|f| format!("'{}'", f)).collect();
    let expected = match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => "nothing".to_string(),
    };
    format!("invalid output format '{}': --output must be {}", raw, expected)
}

/// Arguments shared by every listing command
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Organization name
    pub organization: String,

    /// TFE host (falls back to TFE_HOSTNAME, then app.terraform.io)
    pub address: Option<String>,

    /// API token (falls back to TFE_TOKEN, TFC_TOKEN, HCP_TOKEN, then the Terraform credentials file)
    pub token: Option<String>,

    /// Output format: table, json or alfred (availability depends on the command)
    #[arg(
        short = 'o',
        long = "output",
        visible_alias = "format",
        visible_short_alias = 'f'
    )]
    pub output: Option<String>,
}
