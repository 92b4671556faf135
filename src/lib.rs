pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ui;
