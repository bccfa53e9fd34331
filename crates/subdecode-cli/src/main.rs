//! SubDecode CLI
//!
//! Fetch, decode, deduplicate and copy subscription links.

use clap::{CommandFactory, Parser, ValueEnum};
use subdecode_core::logging_facility::{self, Profile};

mod clipboard;
mod commands;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "subdecode")]
#[command(version)]
#[command(
    about = "SubDecode - fetch, decode, deduplicate, and copy subscription links",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    sync: commands::sync::SyncArgs,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_profile(&self) -> Profile {
        match (self.log_format, self.verbose) {
            (LogFormat::Json, _) => Profile::Production,
            (LogFormat::Pretty, true) => Profile::Development,
            (LogFormat::Pretty, false) => Profile::Cli,
        }
    }
}

fn main() {
    if std::env::args_os().len() <= 1 {
        let _ = Cli::command().print_help();
        println!();
        return;
    }

    let cli = Cli::parse();
    logging_facility::init(cli.log_profile());

    if let Err(e) = commands::sync::execute(cli.sync) {
        println!("❌ {}", e);
        std::process::exit(1);
    }
}
