//! tagu - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::ExitCode;

use tagu::{run_aws_command, Cli, Command};

// Runs are strictly sequential; one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tagu v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: {:?}", cli);

    let result = match &cli.command {
        Command::Aws(args) => run_aws_command(args, cli.quiet).await,
    };

    match result {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
