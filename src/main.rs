//! MindScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use mindscribe::cli::{self, Cli};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        0 => ExitCode::SUCCESS,
        code => ExitCode::from(code as u8),
    }
}
