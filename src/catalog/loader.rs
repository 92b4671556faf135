use std::path::Path;

use tracing::info;

use super::types::Phase;
use crate::errors::KresourError;

/// Category files in display order. One phase per file.
pub const CATEGORY_FILES: [&str; 7] = [
    "reconnaissance.json",
    "scanning.json",
    "enumeration.json",
    "exploitation.json",
    "post-exploitation.json",
    "reporting.json",
    "misc.json",
];

/// Load every category file from `data_dir`, preserving file order as phase order.
pub fn load(data_dir: &Path) -> Result<Vec<Phase>, KresourError> {
    let mut phases = Vec::with_capacity(CATEGORY_FILES.len());

    for file_name in CATEGORY_FILES {
        let path = data_dir.join(file_name);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            KresourError::FileMissing {
                path: path.clone(),
                source,
            }
        })?;

        let phase: Phase =
            serde_json::from_str(&content).map_err(|source| KresourError::Malformed {
                file: file_name.to_string(),
                source,
            })?;
        info!(phase = %phase.name, tools = phase.tools.len(), "Loaded catalog phase");
        phases.push(phase);
    }

    Ok(phases)
}
