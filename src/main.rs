use std::path::PathBuf;
use std::process;

use clap::Parser;
use daymail::Config;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "daymail")]
#[command(about = "Emails you a digest of today's remaining calendar events")]
struct Cli {
    /// Use this config file instead of ~/.config/daymail/config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the rendered digest instead of sending mail
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    if let Err(err) = daymail::run(&config, cli.dry_run) {
        error!("{}", err);
        process::exit(1);
    }
}

/// Logging with environment-based filtering, defaulting to info, on stderr.
fn init_logging() {
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
