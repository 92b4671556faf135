pub mod types;
pub mod classification;

pub use types::KresourError;
pub use classification::ErrorClassification;
