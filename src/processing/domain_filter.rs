use crate::core::constants::{hosts, patterns};
use crate::core::error::Result;
use crate::core::types::{FilterOptions, FilterOutcome, HostnamePolicy};
use crate::logging;
use crate::validation::{hostname, parse_request_url};

/// Keep only the URLs whose hostname is on the allow-list.
///
/// Each entry is validated, then parsed again for its hostname. The host
/// check always sees the entry as given; when suffix stripping is enabled it
/// only changes the string that is kept.
///
/// Returns an error only when a hostname cannot be extracted and the policy
/// is [`HostnamePolicy::Abort`].
pub fn clean_urls(urls: Vec<String>, options: FilterOptions) -> Result<FilterOutcome> {
    let mut outcome = FilterOutcome {
        kept: Vec::with_capacity(urls.len()),
        ..Default::default()
    };

    for url in urls {
        if let Err(err) = parse_request_url(&url) {
            logging::log_invalid_url(&url, &err);
            outcome.invalid += 1;
            continue;
        }

        let host = match hostname(&url) {
            Ok(host) => host,
            Err(err) => match options.hostname_policy {
                HostnamePolicy::Skip => {
                    logging::log_hostless_url(&err);
                    outcome.hostless += 1;
                    continue;
                }
                HostnamePolicy::Abort => return Err(err),
            },
        };

        if !is_allowed_host(&host) {
            logging::log_invalid_domain(&host);
            outcome.disallowed += 1;
            continue;
        }

        let kept = if options.strip_target_suffix {
            strip_target_suffix(url)
        } else {
            url
        };
        outcome.kept.push(kept);
    }

    Ok(outcome)
}

/// Exact, case-sensitive membership in the allow-list. No subdomain matching.
pub fn is_allowed_host(host: &str) -> bool {
    hosts::ALLOWED.contains(&host)
}

/// Remove one trailing `target=&quot;_blank&quot;` if present.
pub fn strip_target_suffix(mut url: String) -> String {
    if url.ends_with(patterns::TARGET_BLANK_SUFFIX) {
        url.truncate(url.len() - patterns::TARGET_BLANK_SUFFIX.len());
    }
    url
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::core::error::UrlSiftError;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn abort() -> FilterOptions {
        FilterOptions {
            hostname_policy: HostnamePolicy::Abort,
            ..Default::default()
        }
    }

    fn stripping() -> FilterOptions {
        FilterOptions {
            strip_target_suffix: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_urls() {
        let urls = strings(&[
            "https://www.documentcloud.org/docs/123.pdf",
            "https://evil.example.com/x",
            "https://s3.documentcloud.org/y",
        ]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        assert_eq!(
            outcome.kept,
            strings(&[
                "https://www.documentcloud.org/docs/123.pdf",
                "https://s3.documentcloud.org/y",
            ])
        );
        assert_eq!(outcome.disallowed, 1);
        assert_eq!(outcome.dropped(), 1);
    }

    #[test]
    fn test_clean_urls__all_allowed_hosts() {
        let urls = strings(&[
            "https://s3.documentcloud.org/a",
            "https://documentcloud.org/b",
            "https://www.documentcloud.org/c",
            "https://beta.documentcloud.org/d",
        ]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, urls);
    }

    #[test]
    fn test_clean_urls__no_subdomain_or_lookalike_matching() {
        let urls = strings(&[
            "https://assets.documentcloud.org/a",
            "https://documentcloud.org.evil.com/b",
            "https://notdocumentcloud.org/c",
            "https://documentcloud.com/d",
        ]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.disallowed, 4);
    }

    #[test]
    fn test_clean_urls__mixed_case_host_is_dropped() {
        let urls = strings(&[
            "https://DocumentCloud.ORG/doc.pdf",
            "https://WWW.documentcloud.org/a",
            "https://documentcloud.org/Doc.PDF",
        ]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, strings(&["https://documentcloud.org/Doc.PDF"]));
        assert_eq!(outcome.disallowed, 2);
    }

    #[test]
    fn test_clean_urls__kept_urls_are_not_rewritten() {
        let urls = strings(&[
            "https://documentcloud.org",
            "https://documentcloud.org/",
            "https://documentcloud.org:443/",
            "https://documentcloud.org/a b%20c",
        ]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, urls);
    }

    #[test]
    fn test_clean_urls__empty_authority_follows_policy() {
        let urls = strings(&["https:///documentcloud.org/x", "https://documentcloud.org/ok"]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();
        assert_eq!(outcome.kept, strings(&["https://documentcloud.org/ok"]));
        assert_eq!(outcome.hostless, 1);

        let err = clean_urls(urls, abort()).unwrap_err();
        assert!(matches!(err, UrlSiftError::Hostname { .. }));
    }

    #[test]
    fn test_clean_urls__port_is_ignored_for_host_check() {
        let urls = strings(&["https://documentcloud.org:8443/x"]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, urls);
    }

    #[test]
    fn test_clean_urls__drops_invalid_entries() {
        let urls = strings(&["not a url", "/relative/path", "mailto:a@documentcloud.org"]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.invalid, 3);
    }

    #[test]
    fn test_clean_urls__hostless_skipped_by_default() {
        let urls = strings(&["file:///tmp/data.tsv", "https://documentcloud.org/ok"]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, strings(&["https://documentcloud.org/ok"]));
        assert_eq!(outcome.hostless, 1);
    }

    #[test]
    fn test_clean_urls__hostless_aborts_with_abort_policy() {
        let urls = strings(&["https://documentcloud.org/ok", "file:///tmp/data.tsv"]);

        let err = clean_urls(urls, abort()).unwrap_err();

        assert!(matches!(
            err,
            UrlSiftError::Hostname { ref url, .. } if url == "file:///tmp/data.tsv"
        ));
    }

    #[test]
    fn test_clean_urls__abort_policy_without_hostless_entries() {
        let urls = strings(&["https://documentcloud.org/ok", "https://evil.example.com/"]);

        let outcome = clean_urls(urls, abort()).unwrap();

        assert_eq!(outcome.kept, strings(&["https://documentcloud.org/ok"]));
    }

    #[test]
    fn test_clean_urls__strips_suffix_from_kept_url() {
        let urls = strings(&["https://www.documentcloud.org/doc.pdftarget=&quot;_blank&quot;"]);

        let outcome = clean_urls(urls, stripping()).unwrap();

        assert_eq!(
            outcome.kept,
            strings(&["https://www.documentcloud.org/doc.pdf"])
        );
    }

    #[test]
    fn test_clean_urls__suffix_kept_when_stripping_disabled() {
        let urls = strings(&["https://www.documentcloud.org/doc.pdftarget=&quot;_blank&quot;"]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, urls);
    }

    #[test]
    fn test_clean_urls__host_check_uses_unstripped_entry() {
        // Stripping would yield an allowed host, but the check runs first
        let urls = strings(&["https://documentcloud.orgtarget=&quot;_blank&quot;"]);

        let outcome = clean_urls(urls, stripping()).unwrap();

        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.dropped(), 1);
    }

    #[test]
    fn test_clean_urls__preserves_order_and_duplicates() {
        let urls = strings(&[
            "https://documentcloud.org/2",
            "https://documentcloud.org/1",
            "https://documentcloud.org/2",
        ]);

        let outcome = clean_urls(urls.clone(), FilterOptions::default()).unwrap();

        assert_eq!(outcome.kept, urls);
    }

    #[test]
    fn test_clean_urls__output_hosts_are_allowed() {
        let urls = strings(&[
            "https://www.documentcloud.org/a",
            "http://example.org/b",
            "https://beta.documentcloud.org:9000/c",
            "not a url",
            "https://s3.amazonaws.com/d",
        ]);

        let outcome = clean_urls(urls, FilterOptions::default()).unwrap();

        for url in &outcome.kept {
            assert!(is_allowed_host(&hostname(url).unwrap()));
        }
        assert_eq!(outcome.kept.len(), 2);
    }

    #[test]
    fn test_is_allowed_host() {
        assert!(is_allowed_host("documentcloud.org"));
        assert!(is_allowed_host("s3.documentcloud.org"));
        assert!(!is_allowed_host("DocumentCloud.org"));
        assert!(!is_allowed_host("documentcloud.org."));
        assert!(!is_allowed_host(""));
    }

    #[test]
    fn test_strip_target_suffix() {
        assert_eq!(
            strip_target_suffix("https://a/xtarget=&quot;_blank&quot;".to_string()),
            "https://a/x"
        );
        assert_eq!(
            strip_target_suffix("https://a/target=&quot;_blank&quot;/more".to_string()),
            "https://a/target=&quot;_blank&quot;/more"
        );
        assert_eq!(strip_target_suffix("https://a/x".to_string()), "https://a/x");
    }
}
