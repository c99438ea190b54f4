//! Runs module

mod api;
mod models;

pub use models::{is_final_status, Run, RunActions, RunAttributes, RunResource};
