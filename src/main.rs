mod cli;
mod config;
mod logging;
mod model;
mod seed;
mod state;
mod tui;

use std::process;

use clap::Parser;

use cli::Cli;

fn main() {
    if let Err(e) = cli::run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
