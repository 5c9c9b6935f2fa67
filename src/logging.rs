use crate::config::Config;
use crate::core::types::{FilterOutcome, RunSummary};
use log::{debug, error, info, warn};
use std::path::Path;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config, root: &Path) {
    debug!(
        "Configuration: root={}, output={}, quote={}, strip_target_suffix={}, on_hostname_error={}",
        root.display(),
        config.output_path().display(),
        config.quote_enabled(),
        config.strip_target_suffix.unwrap_or(false),
        config
            .on_hostname_error
            .as_deref()
            .unwrap_or(crate::core::constants::hostname_policies::DEFAULT)
    );
}

/// Log file processing information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Processing {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log that no input files exist under the root
pub fn log_no_files(root: &Path, suffix: &str) {
    info!(
        "No {suffix} files found in {} or its subdirectories.",
        root.display()
    );
}

pub fn log_extracting_file(path: &Path) {
    info!("Extracting URLs from file: {}", path.display());
}

pub fn log_file_failed(path: &Path, err: &dyn std::error::Error) {
    error!("Error extracting URLs from file {}: {err}", path.display());
}

/// Log a URL candidate rejected during extraction or filtering
pub fn log_invalid_url(candidate: &str, err: &dyn std::error::Error) {
    warn!("Invalid URL skipped: {candidate}");
    debug!("  reason: {err}");
}

pub fn log_invalid_domain(hostname: &str) {
    warn!("Invalid domain skipped: {hostname}");
}

/// Log a URL dropped because no hostname could be extracted
pub fn log_hostless_url(err: &dyn std::error::Error) {
    warn!("Skipping URL without hostname: {err}");
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs (from {total_found} total)");
}

/// Log how the domain filter treated the unique URLs
pub fn log_filter_result(outcome: &FilterOutcome) {
    info!(
        "Kept {} URLs on allowed domains, dropped {}",
        outcome.kept.len(),
        outcome.dropped()
    );
    debug!(
        "  invalid={}, disallowed={}, hostless={}",
        outcome.invalid, outcome.disallowed, outcome.hostless
    );
}

pub fn log_saved(url_count: usize, output: &Path) {
    info!("Successfully saved {url_count} URLs to {}", output.display());
}

/// Log the end-of-run counters
pub fn log_summary(summary: &RunSummary) {
    if summary.files_failed == 0 {
        info!(
            "Done: {} file(s) scanned, {} URLs extracted, {} unique, {} kept",
            summary.files_scanned, summary.urls_extracted, summary.unique_urls, summary.urls_kept
        );
    } else {
        warn!(
            "Done with errors: {} of {} file(s) failed, {} URLs extracted, {} unique, {} kept",
            summary.files_failed,
            summary.files_scanned,
            summary.urls_extracted,
            summary.unique_urls,
            summary.urls_kept
        );
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
