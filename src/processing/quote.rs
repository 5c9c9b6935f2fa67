/// Wrap each URL as `"<url>",` so the output can be pasted into a source array.
pub fn quote_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter().map(|url| format!("\"{url}\",")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_urls() {
        let urls = vec![
            "https://documentcloud.org/a".to_string(),
            "https://s3.documentcloud.org/b".to_string(),
        ];

        let actual = quote_urls(urls);

        assert_eq!(
            actual,
            vec![
                "\"https://documentcloud.org/a\",".to_string(),
                "\"https://s3.documentcloud.org/b\",".to_string(),
            ]
        );
    }

    #[test]
    fn test_quote_urls_empty() {
        assert!(quote_urls(Vec::new()).is_empty());
    }
}
