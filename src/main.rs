use clap::Parser;
use std::process::ExitCode;

use roster::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    roster::logging::init();

    let cli = Cli::parse();

    match cli.run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
