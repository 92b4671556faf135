use std::path::Path;

use tracing::warn;

use super::loader;
use super::types::{Phase, Tool};
use crate::errors::KresourError;

/// Immutable, ordered collection of phases, populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    phases: Vec<Phase>,
}

impl CatalogStore {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self { phases }
    }

    /// Load the catalog, falling back to an empty store when loading fails.
    pub fn load_or_empty(data_dir: &Path) -> Self {
        match loader::load(data_dir) {
            Ok(phases) => Self::new(phases),
            Err(e) => {
                warn!(error = %e, "Catalog load failed, continuing with an empty catalog");
                Self::default()
            }
        }
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn phase_at(&self, index: usize) -> Result<&Phase, KresourError> {
        self.phases
            .get(index)
            .ok_or_else(|| KresourError::index_out_of_range("phase", index, self.phases.len()))
    }

    pub fn tool_at(&self, phase: usize, tool: usize) -> Result<&Tool, KresourError> {
        let tools = &self.phase_at(phase)?.tools;
        tools
            .get(tool)
            .ok_or_else(|| KresourError::index_out_of_range("tool", tool, tools.len()))
    }
}
