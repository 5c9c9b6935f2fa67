use clap::Parser;
use urlsift::config::{CliConfig, Config};
use urlsift::core::UrlSiftError;
use urlsift::discovery::Finder;
use urlsift::logging;
use urlsift::pipeline;
use urlsift::printer::Writer;
use urlsift::ui::{Cli, cli_to_config};

use std::path::Path;

fn main() {
    let cli = Cli::parse();

    match run_urlsift_logic(&cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main extraction logic extracted from main() for testing
pub fn run_urlsift_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);

    let root = Path::new(&cli.root);
    logging::log_config_info(&config, root);

    match pipeline::run(root, &config, &Finder::default(), &Writer) {
        Ok(summary) => {
            logging::log_summary(&summary);
            Ok(0)
        }
        Err(e) => {
            logging::log_error(failure_context(&e), Some(&e));
            Ok(1)
        }
    }
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::load_from_standard_locations()?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

fn failure_context(err: &UrlSiftError) -> &'static str {
    match err {
        UrlSiftError::FileWalking(_) => "Error listing TSV files",
        UrlSiftError::Hostname { .. } => "Fatal: could not extract hostname",
        UrlSiftError::Io(_) => "Error saving URLs to file",
        _ => "Run failed",
    }
}
