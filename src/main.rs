use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

use terminal_note::APP_NAME;
use terminal_note::core::config::{self, CliOverrides, ResolvedConfig};
use terminal_note::core::vault::Vault;
use terminal_note::tui;

#[derive(Parser)]
#[command(name = APP_NAME, version, about = "Terminal notes kept as plain files")]
struct Args {
    /// Notes directory (default: ~/.terminal-note)
    #[arg(short, long)]
    vault: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match config::load_config().and_then(|file| {
        config::resolve(
            &file,
            &CliOverrides {
                vault: args.vault,
                log_level: args.log_level,
            },
        )
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    log::info!("{} {} starting up", APP_NAME, env!("CARGO_PKG_VERSION"));

    let vault = match Vault::open(config.vault) {
        Ok(vault) => vault,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{APP_NAME}: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(&vault) {
        Ok(()) => {
            log::info!("Exiting cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("{APP_NAME}: terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// File logger; the terminal belongs to the UI. Logging is skipped if the
/// file cannot be opened.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = OpenOptions::new().create(true).append(true).open(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
