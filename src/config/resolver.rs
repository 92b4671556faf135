use std::path::PathBuf;

use tracing::debug;

use super::types::{AppConfig, DATA_DIR_ENV, DEFAULT_DATA_DIR};
use crate::errors::KresourError;

/// Resolve the configuration from the process environment.
pub fn resolve() -> Result<AppConfig, KresourError> {
    resolve_from(std::env::var(DATA_DIR_ENV).ok())
}

/// Resolve the configuration from an optional data directory override.
///
/// An empty override counts as unset. The resolved directory must exist.
pub fn resolve_from(data_dir: Option<String>) -> Result<AppConfig, KresourError> {
    let data_dir = match data_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_DATA_DIR),
    };

    if !data_dir.is_dir() {
        return Err(KresourError::Config(format!(
            "data directory not found: {}",
            data_dir.display()
        )));
    }

    debug!(data_dir = %data_dir.display(), "Resolved data directory");
    Ok(AppConfig { data_dir })
}
