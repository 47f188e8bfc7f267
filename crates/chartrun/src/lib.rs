// File: crates/chartrun/src/lib.rs
// Summary: CLI building blocks shared by the binary and its tests.

pub mod cli;
pub mod scripts;

use anyhow::Result;

use chartrun_core::ChartRequest;

use crate::cli::ScriptCmd;

/// The chart requests a script draws, in order.
pub fn script_requests(script: &ScriptCmd) -> Result<Vec<ChartRequest>> {
    match script {
        ScriptCmd::Showcase => Ok(scripts::showcase()),
        ScriptCmd::ScatterBox => Ok(scripts::scatter_box()),
        ScriptCmd::Table(args) => scripts::table(args),
    }
}
