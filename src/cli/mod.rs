pub mod browse;
pub mod commands;

pub use commands::Cli;
