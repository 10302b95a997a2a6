use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Effective application configuration. Precedence: env > file > default.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub recommend: RecommendConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Optional JSON file with the event catalog; the built-in fixture set
    /// is used when absent.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecommendConfig {
    pub max_recommendations: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig { path: None },
            recommend: RecommendConfig {
                max_recommendations: crate::recommend::MAX_RECOMMENDATIONS,
            },
            logging: LoggingConfig { level: "info".to_owned(), format: LogFormat::Compact },
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    catalog: Option<FileCatalog>,
    recommend: Option<FileRecommend>,
    logging: Option<FileLogging>,
}

#[derive(Debug, Default, Deserialize)]
struct FileCatalog {
    path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct FileRecommend {
    max_recommendations: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    format: Option<LogFormat>,
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = options
            .config_path
            .or_else(|| env::var("INGRESSO_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("ingresso.toml"));

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let file: FileConfig = toml::from_str(&contents)
                    .map_err(|source| ConfigError::ParseFile { path: path.clone(), source })?;
                config.apply_file(file);
            }
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                if options.require_file {
                    return Err(ConfigError::MissingConfigFile(path));
                }
            }
            Err(source) => return Err(ConfigError::ReadFile { path, source }),
        }

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(catalog) = file.catalog {
            if catalog.path.is_some() {
                self.catalog.path = catalog.path;
            }
        }
        if let Some(recommend) = file.recommend {
            if let Some(max) = recommend.max_recommendations {
                self.recommend.max_recommendations = max;
            }
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(path) = env::var("INGRESSO_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(path));
        }
        if let Ok(value) = env::var("INGRESSO_MAX_RECOMMENDATIONS") {
            let max = value.parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
                key: "INGRESSO_MAX_RECOMMENDATIONS".to_owned(),
                value: value.clone(),
            })?;
            self.recommend.max_recommendations = max;
        }
        if let Ok(level) = env::var("INGRESSO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(value) = env::var("INGRESSO_LOG_FORMAT") {
            self.logging.format = match value.as_str() {
                "compact" => LogFormat::Compact,
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidEnvOverride {
                        key: "INGRESSO_LOG_FORMAT".to_owned(),
                        value,
                    })
                }
            };
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.recommend.max_recommendations == 0 {
            return Err(ConfigError::Validation(
                "recommend.max_recommendations must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}
