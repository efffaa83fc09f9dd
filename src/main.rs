//! `elapsed-days`: prompts for pairs of `DD/MM/YYYY` dates on stdin and prints
//! the number of whole days between each pair.
//!
//! ```bash
//! elapsed-days
//! elapsed-days --on-error exit
//! printf '12/02/2000\n14/02/2000\n' | elapsed-days --format json
//! ```

use std::io;

use clap::{Parser, ValueEnum};
use elapsed_days::shell::{ErrorPolicy, OutputFormat, Shell, ShellConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "elapsed-days")]
#[command(about = "Count the days strictly between two DD/MM/YYYY dates", long_about = None)]
struct Cli {
    /// What to do when a date is rejected
    #[arg(long, value_enum, env = "ELAPSED_DAYS_ON_ERROR", default_value = "reprompt")]
    on_error: OnError,

    /// Output style
    #[arg(long, value_enum, env = "ELAPSED_DAYS_FORMAT", default_value = "text")]
    format: Format,

    /// Do not print the instructions banner
    #[arg(long)]
    no_banner: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnError {
    /// End the session on the first invalid date
    Exit,
    /// Report the error and ask for the next pair
    Reprompt,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Exit => Self::Exit,
            OnError::Reprompt => Self::Reprompt,
        }
    }
}

impl From<Format> for OutputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

impl From<&Cli> for ShellConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            on_error: cli.on_error.into(),
            format: cli.format.into(),
            banner: !cli.no_banner,
        }
    }
}

/// Logs go to stderr so they never mix with results on stdout.
fn init_tracing() {
    let log_format =
        std::env::var("ELAPSED_DAYS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ShellConfig::from(&cli);
    tracing::debug!(?config, "starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config).run()?;
    Ok(())
}
