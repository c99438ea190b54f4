//! Run data models

use serde::{Deserialize, Serialize};

/// Statuses after which a run needs no further attention
const FINAL_STATUSES: &[&str] = &[
    "applied",
    "discarded",
    "errored",
    "canceled",
    "force_canceled",
    "planned_and_finished",
    "planned_and_saved",
];

/// Check if a run status is final (the run is no longer in progress)
pub fn is_final_status(status: &str) -> bool {
    FINAL_STATUSES.contains(&status)
}

/// Run data from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunResource {
    pub id: String,
    pub attributes: RunAttributes,
}

/// Run attributes from TFE API
#[derive(Deserialize, Debug, Clone)]
pub struct RunAttributes {
    pub status: String,
    pub actions: Option<RunActions>,
}

/// Run action flags
#[derive(Deserialize, Debug, Clone)]
pub struct RunActions {
    #[serde(rename = "is-confirmable")]
    pub is_confirmable: Option<bool>,
}

impl RunResource {
    /// Whether the run is waiting for a user to confirm the apply
    pub fn is_confirmable(&self) -> bool {
        self.attributes
            .actions
            .as_ref()
            .and_then(|a| a.is_confirmable)
            .unwrap_or(false)
    }
}

/// Current run of a workspace, as listed by `run list`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub workspace: String,
    pub status: String,
    pub is_confirmable: bool,
    pub id: String,
}
