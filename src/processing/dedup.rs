use rustc_hash::FxHashSet;

/// Remove duplicate strings, keeping the first occurrence of each.
///
/// Equality is exact: no case folding, trailing slash or percent-encoding
/// normalization happens here.
pub fn dedup(urls: Vec<String>) -> Vec<String> {
    let mut seen_urls = FxHashSet::with_capacity_and_hasher(urls.len(), Default::default());
    let mut unique_urls = Vec::with_capacity(urls.len());

    for url in urls {
        if seen_urls.insert(url.clone()) {
            unique_urls.push(url);
        }
    }

    unique_urls
}
