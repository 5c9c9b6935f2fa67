//! URL collection transforms
//!
//! Pure stages applied to the extracted URLs: deduplication,
//! allow-list filtering and output decoration.

pub mod dedup;
pub mod domain_filter;
pub mod quote;

// Re-export commonly used items
pub use dedup::dedup;
pub use domain_filter::{clean_urls, is_allowed_host, strip_target_suffix};
pub use quote::quote_urls;
