// Command-line interface definitions and parsing for urlsift

use crate::config::CliConfig;
use crate::core::constants::hostname_policies;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan recursively for .tsv files
    #[arg(default_value = ".")]
    pub root: String,

    // Output
    /// File to write the URLs to (default: extracted_urls.txt)
    #[arg(short = 'o', long, value_name = "FILE", help_heading = "Output")]
    pub output: Option<String>,

    /// Write bare URLs instead of "<url>", lines
    #[arg(long, help_heading = "Output")]
    pub no_quote: bool,

    // Filtering
    /// Strip a trailing target=&quot;_blank&quot; from kept URLs
    #[arg(long, help_heading = "Filtering")]
    pub strip_target_suffix: bool,

    /// What to do with a URL that has no hostname (default: skip)
    #[arg(long, value_name = "POLICY", value_parser = hostname_policies::ALL, help_heading = "Filtering")]
    pub on_hostname_error: Option<String>,

    // Verbosity
    /// Only log errors
    #[arg(short = 'q', long, help_heading = "Verbosity")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, help_heading = "Verbosity")]
    pub verbose: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert derive-based CLI arguments to the CliConfig structure
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        output: cli.output.clone(),
        no_quote: cli.no_quote,
        strip_target_suffix: cli.strip_target_suffix,
        on_hostname_error: cli.on_hostname_error.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
