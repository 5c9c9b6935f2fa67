//! End-to-end run: discover, extract, deduplicate, filter, decorate, write.

use std::path::Path;

use crate::config::Config;
use crate::core::constants::files;
use crate::core::error::Result;
use crate::core::types::RunSummary;
use crate::discovery::{UrlFinder, find_files};
use crate::logging;
use crate::printer::WriteToFile;
use crate::processing::{clean_urls, dedup, quote_urls};

/// Run the whole pipeline over the `.tsv` files under `root`.
///
/// Files that fail to read are logged and skipped. When no input file exists
/// nothing is written and the summary has no output path. Listing the root,
/// an aborting hostname failure, and writing the output are the only errors
/// returned.
pub fn run<F, W>(root: &Path, config: &Config, finder: &F, writer: &W) -> Result<RunSummary>
where
    F: UrlFinder,
    W: WriteToFile,
{
    let options = config.filter_options()?;

    let tsv_files = find_files(root, files::TSV_SUFFIX)?;
    if tsv_files.is_empty() {
        logging::log_no_files(root, files::TSV_SUFFIX);
        return Ok(RunSummary::default());
    }
    logging::log_file_info(tsv_files.len(), &tsv_files);

    let mut summary = RunSummary {
        files_scanned: tsv_files.len(),
        ..Default::default()
    };

    let mut all_urls = Vec::new();
    for path in &tsv_files {
        logging::log_extracting_file(path);
        match finder.find_urls(path) {
            Ok(urls) => all_urls.extend(urls),
            Err(err) => {
                logging::log_file_failed(path, &err);
                summary.files_failed += 1;
            }
        }
    }
    summary.urls_extracted = all_urls.len();

    let unique_urls = dedup(all_urls);
    summary.unique_urls = unique_urls.len();
    logging::log_url_discovery(summary.unique_urls, summary.urls_extracted);

    let outcome = clean_urls(unique_urls, options)?;
    logging::log_filter_result(&outcome);
    summary.urls_kept = outcome.kept.len();

    let lines = if config.quote_enabled() {
        quote_urls(outcome.kept)
    } else {
        outcome.kept
    };

    let output = config.output_path();
    writer.write_lines(&output, &lines)?;
    logging::log_saved(lines.len(), &output);
    summary.output = Some(output);

    Ok(summary)
}
