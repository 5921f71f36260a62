//! Main entry point for the si-tui binary.
//!
//! Runs the terminal host with the configuration found in the current
//! directory. The `step-indicator` CLI offers the same host with flags.

use std::path::Path;

use anyhow::Result;
use si_core::config::loader::load_config;
use si_tui::run_app;
use si_tui::AppOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config(Path::new("."))?;
    run_app(AppOptions {
        config,
        ..AppOptions::default()
    })
    .await
}
