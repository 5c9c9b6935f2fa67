//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::constants::{files, hostname_policies};
use crate::core::error::{Result, UrlSiftError};
use crate::core::types::{FilterOptions, HostnamePolicy};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// File the surviving URLs are written to
    pub output: Option<String>,

    /// Wrap each URL as `"<url>",`
    pub quote: Option<bool>,

    /// Strip the leaked `target=&quot;_blank&quot;` suffix from kept URLs
    pub strip_target_suffix: Option<bool>,

    /// What to do when a URL has no extractable hostname (skip, abort)
    pub on_hostname_error: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: Some(files::DEFAULT_OUTPUT.to_string()),
            quote: Some(true),
            strip_target_suffix: Some(false),
            on_hostname_error: Some(hostname_policies::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlSiftError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            UrlSiftError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find and load a config file in the working directory or one of its
    /// parents, falling back to defaults when none exists.
    ///
    /// A config file that exists but does not load is an error.
    pub fn load_from_standard_locations() -> Result<Self> {
        for depth in 0..=files::CONFIG_PARENT_DEPTH {
            let path = PathBuf::from(format!(
                "{}{}",
                "../".repeat(depth),
                files::CONFIG_FILE_NAME
            ));
            if path.is_file() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref output) = cli_config.output {
            self.output = Some(output.clone());
        }
        if cli_config.no_quote {
            self.quote = Some(false);
        }
        if cli_config.strip_target_suffix {
            self.strip_target_suffix = Some(true);
        }
        if let Some(ref policy) = cli_config.on_hostname_error {
            self.on_hostname_error = Some(policy.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Output path, defaulting to `extracted_urls.txt`
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.output.as_deref().unwrap_or(files::DEFAULT_OUTPUT))
    }

    pub fn quote_enabled(&self) -> bool {
        self.quote.unwrap_or(true)
    }

    /// Parse the configured hostname failure policy
    pub fn hostname_policy(&self) -> Result<HostnamePolicy> {
        self.on_hostname_error
            .as_deref()
            .unwrap_or(hostname_policies::DEFAULT)
            .parse::<HostnamePolicy>()
            .map_err(|e| UrlSiftError::Config(e.to_string()))
    }

    /// Options for the domain filter
    pub fn filter_options(&self) -> Result<FilterOptions> {
        Ok(FilterOptions {
            hostname_policy: self.hostname_policy()?,
            strip_target_suffix: self.strip_target_suffix.unwrap_or(false),
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref output) = self.output
            && output.trim().is_empty()
        {
            return Err(UrlSiftError::Config(
                "Output path cannot be empty. Expected a file name such as 'extracted_urls.txt'."
                    .to_string(),
            ));
        }

        self.hostname_policy()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub output: Option<String>,             // --output
    pub no_quote: bool,                     // --no-quote
    pub strip_target_suffix: bool,          // --strip-target-suffix
    pub on_hostname_error: Option<String>,  // --on-hostname-error
    pub quiet: bool,                        // --quiet
    pub verbose: bool,                      // --verbose
    pub config_file: Option<String>,        // --config
    pub no_config: bool,                    // --no-config
}
