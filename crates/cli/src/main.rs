use std::process::ExitCode;

use ingresso_core::config::{AppConfig, LoadOptions, LogFormat};

fn main() -> ExitCode {
    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| AppConfig::default().logging);

    let level = logging.level.parse().unwrap_or(tracing::Level::INFO);
    match logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(level).json().init();
        }
    }

    ingresso_cli::run()
}
