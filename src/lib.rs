//! Harvest allow-listed URLs from `.tsv` files.
//!
//! The pipeline walks a directory for `.tsv` files, pulls `http(s)://`
//! URLs out of every line, drops duplicates and anything not hosted on
//! DocumentCloud, and writes the survivors one per line.

pub mod config;
pub mod core;
pub mod discovery;
pub mod logging;
pub mod pipeline;
pub mod printer;
pub mod processing;
pub mod ui;
pub mod validation;

// Re-export commonly used items
pub use config::{CliConfig, Config};
pub use crate::core::{FilterOptions, FilterOutcome, HostnamePolicy, Result, RunSummary, UrlSiftError};
pub use discovery::{Finder, UrlFinder};
pub use printer::{WriteToFile, Writer};
