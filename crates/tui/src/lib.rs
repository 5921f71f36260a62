//! # si-tui
//!
//! Terminal host for the step indicator.
//!
//! Keeps a list of steps in a [`MemoryHost`], lets the user move the
//! current step and edit the list from the keyboard, and draws the
//! markings the indicator applies.

use anyhow::Result;
use si_core::config::models::AppConfig;
use si_protocol::RawStepIndex;

pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

/// What the terminal host starts with.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Loaded configuration.
    pub config: AppConfig,
    /// Step labels; the configured list is used when `None`.
    pub steps: Option<Vec<String>>,
    /// Initial current step.
    pub initial: RawStepIndex,
}

impl AppOptions {
    /// Labels to start with, preferring explicit ones over the configured
    /// list.
    pub fn step_labels(&self) -> Vec<String> {
        self.steps
            .clone()
            .unwrap_or_else(|| self.config.steps.clone())
    }
}

/// Run the terminal host until the user quits.
///
/// The terminal is restored on every exit path, including errors from the
/// event loop.
pub async fn run_app(options: AppOptions) -> Result<()> {
    let mut app = App::new(&options.config, options.step_labels(), options.initial.clone());
    let mut tui = Tui::init()?;

    app.activate();
    let result = app.run(&mut tui).await;
    app.deactivate();

    tui.restore()?;
    tracing::debug!(steps = app.indicator.host().len(), "terminal host exited");
    result
}
