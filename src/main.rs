use clap::Parser;
use std::process::ExitCode;

use storefront::cli::Cli;
use storefront::logging::{LogTarget, init_tracing};
use storefront::paths;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_file = paths::log_path();
    let target = if cli.is_interactive() {
        LogTarget::File(&log_file)
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = init_tracing(cli.log_level.as_deref(), target) {
        eprintln!("warning: {e}");
    }

    match cli.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
