use clap::Parser;
use std::path::PathBuf;

/// Terminal counter: one value, three buttons.
#[derive(Debug, Parser)]
#[command(name = "counter", version)]
pub struct Cli {
    /// Config file path (defaults to the user config directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides COUNTER_LOG and the config file)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}
