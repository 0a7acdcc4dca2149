use url::Url;

/// Structural check only, no network access. Discovered candidates are
/// re-validated with this before any probe or fetch.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(is_valid_url("https://stripe.com"));
        assert!(is_valid_url("https://www.cloudflare.com"));
        assert!(is_valid_url("http://example.com/contact?ref=1"));
    }

    #[test]
    fn rejects_garbage_and_empty_strings() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("fintech startups in Berlin"));
    }

    #[test]
    fn rejects_missing_scheme_or_host() {
        assert!(!is_valid_url("stripe.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("mailto:jane@example.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
    }
}
