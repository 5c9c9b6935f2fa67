/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the compiled-in configuration data: the hostname
/// allow-list, the candidate pattern, and the default file names.
/// Hostnames whose URLs survive the domain filter
pub mod hosts {
    /// Every accepted hostname. Matching is exact and case-sensitive.
    pub const ALLOWED: [&str; 4] = [
        "s3.documentcloud.org",
        "documentcloud.org",
        "www.documentcloud.org",
        "beta.documentcloud.org",
    ];
}

/// Pattern constants used by URL extraction
pub mod patterns {
    /// `http`, optional `s`, `://`, then anything but ASCII whitespace or `"`
    pub const URL_CANDIDATE: &str = r#"https?://[^\t\n\x0C\r "]+"#;

    /// HTML attribute fragment leaked into some scraped URLs
    pub const TARGET_BLANK_SUFFIX: &str = "target=&quot;_blank&quot;";
}

/// File processing constants
pub mod files {
    /// Suffix a file name must end with to be scanned
    pub const TSV_SUFFIX: &str = ".tsv";
    /// Default output file, relative to the working directory
    pub const DEFAULT_OUTPUT: &str = "extracted_urls.txt";
    /// Config file looked up in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".urlsift.toml";
    /// How many parent directories are searched for a config file
    pub const CONFIG_PARENT_DEPTH: usize = 3;
    /// Default capacity hint for lines with a URL candidate per file
    pub const DEFAULT_MATCHING_LINES_PER_FILE: usize = 20;
}

/// Hostname failure policy names as accepted by the CLI and config file
pub mod hostname_policies {
    /// Drop the URL with a warning
    pub const SKIP: &str = "skip";
    /// Stop the run with an error
    pub const ABORT: &str = "abort";

    pub const DEFAULT: &str = SKIP;

    pub const ALL: [&str; 2] = [SKIP, ABORT];
}
