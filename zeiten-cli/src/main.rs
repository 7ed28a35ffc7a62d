//! zeiten CLI - runs the Zeiten/Vereine HTTP API
//!
//! Configuration comes from flags, then environment variables, then a
//! `.env` file in the working directory (skipped when `APP_ENV` or
//! `NODE_ENV` is `production`).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "zeiten",
    author,
    version,
    about = "HTTP API for storing Zeiten and Vereine in PostgreSQL",
    after_help = "A .env file in the working directory is loaded unless APP_ENV or NODE_ENV is set to production."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // before parsing, so clap's env fallbacks see .env values
    let env_file = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    match env_file {
        config::EnvFile::Loaded(path) => tracing::debug!("Loaded {}", path.display()),
        config::EnvFile::Invalid(e) => tracing::warn!("Ignoring .env file: {}", e),
        config::EnvFile::Skipped | config::EnvFile::Missing => {}
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
