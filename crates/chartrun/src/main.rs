// File: crates/chartrun/src/main.rs
// Summary: Entry point; parses the command line, then renders and shows or saves each chart of a script.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chartrun::cli::Cli;
use chartrun::script_requests;
use chartrun_core::{OutputTarget, Runner};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = cli.run_config();
    let requests = script_requests(&cli.script)?;
    info!(script = ?cli.script, charts = requests.len(), "running script");

    let mut runner = Runner::new(config.render.clone()).context("failed to create canvas")?;
    if matches!(config.target, OutputTarget::Display) {
        runner = attach_viewer(runner);
    }

    for (i, req) in requests.iter().enumerate() {
        runner
            .render(req)
            .with_context(|| format!("chart {} ({}) failed to render", i + 1, req.kind))?;
        runner
            .present_or_save(&config.target)
            .with_context(|| format!("chart {} ({}) could not be shown or saved", i + 1, req.kind))?;
    }
    info!(saved = runner.saved_count(), "done");
    Ok(())
}

#[cfg(feature = "window")]
fn attach_viewer(runner: Runner) -> Runner {
    runner.with_presenter(Box::new(chartrun_window::Viewer::new()))
}

#[cfg(not(feature = "window"))]
fn attach_viewer(runner: Runner) -> Runner {
    runner
}
