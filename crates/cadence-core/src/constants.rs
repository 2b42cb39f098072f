/// Name used for the binary and its config file.
pub const APP_NAME: &str = "cadence";

/// Environment variables are read as `CADENCE__SECTION__KEY`.
pub const ENV_PREFIX: &str = "CADENCE";
pub const ENV_SEPARATOR: &str = "__";

/// Default configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = const_str::concat!(APP_NAME, ".toml");

/// Task listings return at most this many rows unless configured otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

pub const DEFAULT_TIMEZONE: &str = "UTC";
pub const DEFAULT_LOG_LEVEL: &str = "info";
