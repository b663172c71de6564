/// Number of years a forward search may cover before it is reported as exhausted.
pub const DEFAULT_MAX_SEARCH_YEARS: u16 = 10;

/// Default `EnvFilter` directive until configuration has been loaded.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Optional configuration file read from the working directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
