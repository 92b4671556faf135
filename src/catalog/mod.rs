pub mod loader;
pub mod store;
pub mod types;

pub use loader::{load, CATEGORY_FILES};
pub use store::CatalogStore;
pub use types::{Command, Phase, Tool};
