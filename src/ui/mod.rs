//! User interface and interaction
//!
//! Command-line parsing for the urlsift binary.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
