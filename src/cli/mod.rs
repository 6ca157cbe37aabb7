// Command-line Module
// Console driver for the RSA and Caesar demonstrations

pub mod app;

pub use app::{run, Command};
