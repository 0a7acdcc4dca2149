// src/scrape/extractor.rs
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::models::CompanyRecord;
use crate::scrape::contact_patterns::ContactPatterns;

/// Turns one candidate URL into one output row. Fetch and parse failures
/// stay inside this component and come back as a placeholder row.
#[async_trait]
pub trait Extract: Send + Sync {
    async fn extract(&self, url: &str) -> CompanyRecord;
}

pub struct PageExtractor {
    client: Client,
    patterns: ContactPatterns,
}

impl PageExtractor {
    pub fn new(timeout: Duration, user_agent: &str) -> Self {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            patterns: ContactPatterns::new(),
        }
    }

    async fn fetch_page(
        &self,
        url: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(format!("HTTP error: {}", response.status()).into());
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);

        Ok(html)
    }

    fn extract_from_html(&self, html: &str, url: &str) -> CompanyRecord {
        let document = Html::parse_document(html);

        let title_selector = Selector::parse("title").unwrap();
        let company_name = document
            .select(&title_selector)
            .next()
            .map(|title| title.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let body_text = visible_text(&document);

        let email = self.patterns.find_email(&body_text);
        let phone = self.patterns.find_phone(&body_text);

        if let Some(email) = email {
            info!("Email found on {}: {}", url, email);
        }
        if let Some(phone) = phone {
            info!("Phone found on {}: {}", url, phone);
        }

        // Email wins over phone when a page carries both.
        let contact = email.or(phone).unwrap_or("Not found").to_string();

        CompanyRecord {
            company_name,
            website: url.to_string(),
            contact,
        }
    }
}

#[async_trait]
impl Extract for PageExtractor {
    async fn extract(&self, url: &str) -> CompanyRecord {
        match self.fetch_page(url).await {
            Ok(html) => self.extract_from_html(&html, url),
            Err(e) => {
                error!("Could not process {}: {}", url, e);
                CompanyRecord::unprocessed(url)
            }
        }
    }
}

// Body text with tag structure stripped and whitespace runs collapsed.
fn visible_text(document: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();
    let raw: String = match document.select(&body_selector).next() {
        Some(body) => body.text().collect(),
        None => document.root_element().text().collect(),
    };

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PageExtractor {
        PageExtractor::new(Duration::from_secs(10), "TestBot/0.1")
    }

    #[test]
    fn pulls_title_and_email() {
        let html = r#"<html><head><title>
            Acme Corp
        </title></head><body><p>Write to jane@example.com</p></body></html>"#;

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.company_name, "Acme Corp");
        assert_eq!(record.website, "https://acme.test");
        assert_eq!(record.contact, "jane@example.com");
    }

    #[test]
    fn email_wins_over_phone() {
        let html = r#"<html><head><title>Acme</title></head>
            <body>Call 555-123-4567 or mail ops@acme.test</body></html>"#;

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.contact, "ops@acme.test");
    }

    #[test]
    fn falls_back_to_phone() {
        let html = r#"<html><head><title>Acme</title></head>
            <body>Call us: +1 (555) 123-4567</body></html>"#;

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.contact, "+1 (555) 123-4567");
    }

    #[test]
    fn marks_pages_without_contacts() {
        let html = "<html><head><title>Acme</title></head><body>About us</body></html>";

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.contact, "Not found");
        assert_eq!(record.company_name, "Acme");
    }

    #[test]
    fn missing_title_leaves_name_empty() {
        let html = "<html><body>hello@acme.test</body></html>";

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.company_name, "");
        assert_eq!(record.contact, "hello@acme.test");
    }

    #[test]
    fn collapses_whitespace_before_matching() {
        let html = "<html><body><div>Call\n\n 555-123-4567</div></body></html>";

        let record = extractor().extract_from_html(html, "https://acme.test");
        assert_eq!(record.contact, "555-123-4567");
    }
}
