use grep::regex::RegexMatcher;
use grep::searcher::SearcherBuilder;
use grep::searcher::sinks::Lossy;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::constants::{files, patterns};
use crate::core::error::Result;
use crate::logging;
use crate::validation::parse_request_url;

use std::path::Path;

static REGEX_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(patterns::URL_CANDIDATE).expect("Failed to compile URL regex pattern")
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(patterns::URL_CANDIDATE).expect("Failed to compile URL regex pattern")
});

pub trait UrlFinder {
    fn find_urls(&self, path: &Path) -> Result<Vec<String>>;
}

#[derive(Default, Debug)]
pub struct Finder {}

impl UrlFinder for Finder {
    fn find_urls(&self, path: &Path) -> Result<Vec<String>> {
        extract_urls_from_file(path)
    }
}

/// Extract every valid URL from the file at `path`, in file order.
///
/// The whole file is read before any candidate is parsed, so a read error
/// yields no partial result.
pub fn extract_urls_from_file(path: &Path) -> Result<Vec<String>> {
    let lines = parse_lines_with_urls(path)?;

    let mut urls = Vec::new();
    for line in &lines {
        urls.extend(extract_urls_from_line(line));
    }

    Ok(urls)
}

/// Find all URL candidates in a single line and keep the ones that parse.
///
/// Candidates are the leftmost, longest, non-overlapping matches of
/// `http(s)://` followed by anything but whitespace or `"`. Kept URLs are
/// the matched text, unchanged. Rejected candidates are logged.
pub fn extract_urls_from_line(line: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(line)
        .map(|candidate| candidate.as_str())
        .filter_map(|candidate| match parse_request_url(candidate) {
            Ok(_) => Some(candidate.to_string()),
            Err(err) => {
                logging::log_invalid_url(candidate, &err);
                None
            }
        })
        .collect()
}

/// Collect the lines of a file that contain at least one URL candidate.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the file.
/// A leading byte order mark is treated as plain bytes, never as UTF-16.
fn parse_lines_with_urls(path: &Path) -> std::io::Result<Vec<String>> {
    let mut matches = Vec::with_capacity(files::DEFAULT_MATCHING_LINES_PER_FILE);

    SearcherBuilder::new().bom_sniffing(false).build().search_path(
        &*REGEX_MATCHER,
        path,
        Lossy(|_line_number, line| {
            matches.push(line.to_string());
            Ok(true)
        }),
    )?;

    Ok(matches)
}
