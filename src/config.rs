// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::storage::StorageFormat;
use crate::utils::validation::Rules;
use crate::validator::DEFAULT_MAX_TITLE_CHARS;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub directory: PathBuf,
    #[serde(default)]
    pub format: StorageFormat,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    pub max_title_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub report_recipient: String,
    #[serde(default)]
    pub publish_log: bool,
}

impl Config {
    /// Layers built-in defaults, the TOML file and `SRP_PIPELINE__*` variables.
    ///
    /// An explicit path must exist; without one `config/default.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, environment())
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        let settings = builder
            .add_source(env)
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::File,
                directory: PathBuf::from("./published"),
                format: StorageFormat::Line,
            },
            validation: ValidationConfig {
                max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            },
            notification: NotificationConfig {
                report_recipient: "manager@company.com".to_string(),
                publish_log: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.validation.max_title_chars == 0 {
            return Err(PipelineError::Config(
                "max_title_chars must be greater than 0".to_string(),
            ));
        }

        if self.storage.backend == StorageBackend::File
            && self.storage.directory.as_os_str().is_empty()
        {
            return Err(PipelineError::Config(
                "storage directory is required for the file backend".to_string(),
            ));
        }

        if !Rules::is_email(&self.notification.report_recipient) {
            return Err(PipelineError::Config(format!(
                "report_recipient is not an e-mail address: {}",
                self.notification.report_recipient
            )));
        }

        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("SRP_PIPELINE")
        .separator("__")
        .try_parsing(true)
}
