//! URL validation logic
//!
//! This module decides whether a string is an absolute request URL
//! and extracts hostnames for the domain filter.

pub mod validator;

// Re-export commonly used items
pub use validator::{hostname, is_url_valid, parse_request_url};
