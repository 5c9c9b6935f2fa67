//! URL discovery and file processing
//!
//! This module handles finding `.tsv` files under a root directory
//! and extracting URLs from their lines.

pub mod finder;
pub mod path_utils;

// Re-export commonly used items
pub use finder::{Finder, UrlFinder, extract_urls_from_file, extract_urls_from_line};
pub use path_utils::find_files;
