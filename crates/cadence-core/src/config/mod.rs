use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE, DEFAULT_LOG_LEVEL, DEFAULT_SEARCH_LIMIT, DEFAULT_TIMEZONE, ENV_PREFIX,
    ENV_SEPARATOR,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA name of the zone whose calendar decides what "today" is.
    pub timezone: String,
    pub search_limit: usize,
}

impl ScheduleConfig {
    /// ## Summary
    /// Resolves the configured timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is not a known IANA zone.
    pub fn tz(&self) -> CoreResult<Tz> {
        self.timezone.parse::<Tz>().map_err(|e| {
            CoreError::InvalidConfiguration(format!("unknown timezone {:?}: {e}", self.timezone))
        })
    }

    /// Listing limit with the zero value mapped to the default.
    #[must_use]
    pub const fn effective_search_limit(&self) -> usize {
        if self.search_limit == 0 {
            DEFAULT_SEARCH_LIMIT
        } else {
            self.search_limit
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: DEFAULT_LOG_LEVEL.to_string(),
            },
            schedule: ScheduleConfig {
                timezone: DEFAULT_TIMEZONE.to_string(),
                search_limit: DEFAULT_SEARCH_LIMIT,
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and the given file.
    /// Environment variables take precedence over the file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from(file: &str) -> Result<Self> {
        Self::load_layered(file, None)
    }

    /// Builds the layered configuration. `env` replaces the process
    /// environment when given.
    fn load_layered(file: &str, env: Option<config::Map<String, String>>) -> Result<Self> {
        Ok(Config::builder()
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            .set_default("schedule.timezone", DEFAULT_TIMEZONE)?
            .set_default("schedule.search_limit", DEFAULT_SEARCH_LIMIT as u64)?
            // TOML file
            .add_source(config::File::with_name(file).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and the config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&str>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load_from(file.unwrap_or(CONFIG_FILE))?;
    settings.schedule.tz()?;
    tracing::debug!(timezone = %settings.schedule.timezone, "Schedule timezone resolved");

    Ok(settings)
}
