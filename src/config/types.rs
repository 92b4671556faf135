use std::path::PathBuf;

/// Environment variable naming the catalog data directory.
pub const DATA_DIR_ENV: &str = "KRESOUR_DATA_DIR";

/// Data directory used when the environment variable is unset or empty.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
}
