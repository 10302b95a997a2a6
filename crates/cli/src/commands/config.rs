use std::env;

use ingresso_core::config::{AppConfig, LoadOptions, LogFormat};

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_owned()];

    lines.push(render_line(
        "catalog.path",
        &config
            .catalog
            .path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(built-in fixtures)".to_owned()),
        source("INGRESSO_CATALOG_PATH"),
    ));
    lines.push(render_line(
        "recommend.max_recommendations",
        &config.recommend.max_recommendations.to_string(),
        source("INGRESSO_MAX_RECOMMENDATIONS"),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("INGRESSO_LOG_LEVEL"),
    ));
    lines.push(render_line(
        "logging.format",
        match config.logging.format {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        },
        source("INGRESSO_LOG_FORMAT"),
    ));

    lines.join("\n")
}

fn source(env_key: &str) -> &'static str {
    if env::var(env_key).is_ok() {
        "env"
    } else {
        "file-or-default"
    }
}

fn render_line(key: &str, value: &str, source: &str) -> String {
    format!("  {key} = {value}  ({source})")
}
