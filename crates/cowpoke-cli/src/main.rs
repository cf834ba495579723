//! Cowpoke CLI - ASCII speech bubbles over ASCII art

mod cli;

use clap::Parser;

fn main() {
    let cli_args = cli::Cli::parse();

    // Logging is initialised inside run() once flags and environment are known
    let mut app = cli::CowpokeApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
