//! ScamSense server entry point
//!
//! # Exit Codes
//!
//! - 0: Success (for `check`: submission accepted)
//! - 1: Submission rejected
//! - 3: Invalid input, configuration or file
//! - 10: Internal error

use clap::Parser;
use scamsense_server::cli::{self, Cli, Commands, ExitCode};
use scamsense_server::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Check { file, format } => {
            cli::execute_check(&file, format).unwrap_or_else(|e| cli::exit_code_for_error(&e))
        }
        Commands::Serve(args) => {
            let config = match args.load_config() {
                Ok(config) => config,
                Err(e) => std::process::exit(cli::exit_code_for_error(&e).into()),
            };

            init_tracing(config.log_format)?;

            match scamsense_server::serve(config).await {
                Ok(()) => ExitCode::Success,
                Err(e) => {
                    tracing::error!(error = %e, "Server stopped");
                    cli::exit_code_for_error(&e)
                }
            }
        }
    };

    std::process::exit(exit_code.into());
}
