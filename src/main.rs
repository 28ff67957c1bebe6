use clap::Parser;
use std::process::ExitCode;

use argo_templates::cli::Cli;
use argo_templates::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The browser sets up file logging once it owns the terminal
    if !cli.command.is_interactive()
        && let Err(e) = logging::init(LogTarget::Stderr)
    {
        eprintln!("warning: {e}");
    }

    match cli.command.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
