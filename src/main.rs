use std::fs::File;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// A tiny terminal roster of people with live add/delete and JSON persistence
#[derive(Parser)]
#[command(name = "roster", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // File logger: stderr belongs to the terminal UI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Info, log_config, log_file);
    }

    if let Err(e) = roster::tui::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
