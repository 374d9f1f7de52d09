// ABOUTME: Entry point for the lambda-deploy CLI application.
// ABOUTME: Parses arguments, sets up logging, and maps failures to exit codes.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use lambda_deploy::error::{EXIT_SUCCESS, EXIT_USAGE};
use lambda_deploy::output::Output;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mut output = Output::new(cli.output_mode());

    if let Err(e) = commands::deploy(&cli, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
