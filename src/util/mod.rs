// Utility Module
// Demo configuration and console formatting

pub mod config;
pub mod display;

pub use config::DemoConfig;
