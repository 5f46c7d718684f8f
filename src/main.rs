use anyhow::Result;
use clap::Parser;
use counter_widget::args::Cli;
use counter_widget::config::Config;
use counter_widget::logging::{init_tracing, resolve_log_path, LOG_ENV_VAR};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    let log_path = resolve_log_path(
        cli.log_file.as_deref(),
        std::env::var_os(LOG_ENV_VAR),
        config.logging.file.as_deref(),
    );
    if let Some(file) = init_tracing(log_path.as_deref()) {
        tracing::info!("Logging to {}", file.display());
    }

    counter_widget::ui::run(&config.ui)?;
    Ok(())
}
