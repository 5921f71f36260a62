//! `step-indicator` command line entry point.
//!
//! Without a subcommand the interactive terminal host is started.

mod logging;
mod render;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use color_eyre::eyre::eyre;
use si_core::config::loader::load_config;
use si_core::config::models::AppConfig;
use si_protocol::RawStepIndex;
use si_tui::AppOptions;

use crate::logging::init_logging;
use crate::logging::LogTarget;
use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "step-indicator",
    version,
    about = "Mark a list of steps as completed, active or pending"
)]
struct Cli {
    /// Directory containing `.step-indicator/`
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Log at debug level
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the markings for a list of steps
    Render {
        /// Comma separated step labels (defaults to `steps.yaml`)
        #[arg(long, value_delimiter = ',')]
        steps: Option<Vec<String>>,

        /// Current step, as a host would hold it
        #[arg(long, allow_hyphen_values = true)]
        step: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Run the interactive terminal host
    Tui {
        /// Comma separated step labels (defaults to `steps.yaml`)
        #[arg(long, value_delimiter = ',')]
        steps: Option<Vec<String>>,

        /// Initial current step
        #[arg(long, allow_hyphen_values = true)]
        step: Option<String>,

        /// Write logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = load_config(&cli.root)?;

    match cli.command {
        Some(Command::Render {
            steps,
            step,
            format,
        }) => {
            let _logging = init_logging(LogTarget::Stderr, cli.debug)?;
            let labels = steps.unwrap_or_else(|| config.steps.clone());
            let output = render::render(&config, labels, RawStepIndex::from(step.as_deref()), format)?;
            println!("{output}");
            Ok(())
        }
        Some(Command::Tui {
            steps,
            step,
            log_file,
        }) => run_tui(config, steps, step, log_file, cli.debug).await,
        None => run_tui(config, None, None, None, cli.debug).await,
    }
}

async fn run_tui(
    config: AppConfig,
    steps: Option<Vec<String>>,
    step: Option<String>,
    log_file: Option<PathBuf>,
    debug: bool,
) -> color_eyre::Result<()> {
    let target = match &log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    let _logging = init_logging(target, debug)?;

    si_tui::run_app(AppOptions {
        config,
        steps,
        initial: RawStepIndex::from(step.as_deref()),
    })
    .await
    .map_err(|e| eyre!(e))
}
