pub mod resolver;
pub mod types;

pub use types::*;
pub use resolver::{resolve, resolve_from};
