use url::Url;

use crate::core::error::{Result, UrlSiftError};

/// Parse `candidate` as an absolute URL usable as a request target.
///
/// A scheme is mandatory, so relative references fail. Opaque URLs such as
/// `mailto:` or `data:` parse but cannot serve as a base and are rejected.
pub fn parse_request_url(candidate: &str) -> Result<Url> {
    let url = Url::parse(candidate)?;

    if url.cannot_be_a_base() {
        return Err(UrlSiftError::Validation(format!(
            "'{candidate}' is not an absolute request URL"
        )));
    }

    Ok(url)
}

/// Check if the given string is a valid request URL.
pub fn is_url_valid(candidate: &str) -> bool {
    parse_request_url(candidate).is_ok()
}

/// Extract the hostname from `url` as written.
///
/// The string must still parse, but the host is read from the raw authority
/// so its case is preserved. Userinfo and port are removed and IPv6 brackets
/// are dropped. Fails when the authority is empty (for example
/// `file:///tmp/data.tsv` or `https:///documentcloud.org/`).
pub fn hostname(url: &str) -> Result<String> {
    let hostname_error = |reason: String| UrlSiftError::Hostname {
        url: url.to_string(),
        reason,
    };

    Url::parse(url).map_err(|e| hostname_error(e.to_string()))?;

    let host = raw_authority(url).map(authority_host).unwrap_or_default();
    if host.is_empty() {
        return Err(hostname_error("URL has no host".to_string()));
    }

    Ok(host.to_string())
}

/// The text between `://` and the first `/`, `?` or `#`.
fn raw_authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn authority_host(authority: &str) -> &str {
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split_once(']').map_or(bracketed, |(host, _)| host);
    }

    host_port.split_once(':').map_or(host_port, |(host, _)| host)
}
