pub mod list;
pub mod viewport;

pub use list::{ListEntry, SelectList};
pub use viewport::ScrollView;
