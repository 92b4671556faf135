use tracing::info;

use crate::catalog::{self, CatalogStore};
use crate::config;
use crate::errors::KresourError;
use crate::ui::terminal;

/// Resolve config, load the catalog and run the browser.
///
/// Config and load failures return before the terminal is touched.
pub fn handle_browse() -> Result<(), KresourError> {
    let config = config::resolve()?;
    let phases = catalog::load(&config.data_dir)?;
    let store = CatalogStore::new(phases);
    info!(data_dir = %config.data_dir.display(), phases = store.len(), "Catalog ready");

    terminal::run(&store)
}
