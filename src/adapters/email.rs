use crate::domain::model::EMAIL_NOT_FOUND;
use crate::domain::ports::EmailScraper;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Fetches a business website and returns the first email-shaped string in
/// document order. Every failure mode (empty URL, connect error, timeout,
/// non-success status, unreadable body, no match) collapses to the
/// "Not found on site" sentinel; nothing propagates to the caller.
pub struct WebsiteEmailScraper {
    client: Client,
    email_regex: Regex,
}

impl WebsiteEmailScraper {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            // The pattern is a literal constant; it always compiles.
            email_regex: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }
}

impl Default for WebsiteEmailScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailScraper for WebsiteEmailScraper {
    async fn scrape_email(&self, website: &str) -> String {
        if website.is_empty() {
            return EMAIL_NOT_FOUND.to_string();
        }

        let response = match self.client.get(website).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Website fetch failed for {}: {}", website, e);
                return EMAIL_NOT_FOUND.to_string();
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Website {} returned status {}", website, response.status());
            return EMAIL_NOT_FOUND.to_string();
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read body from {}: {}", website, e);
                return EMAIL_NOT_FOUND.to_string();
            }
        };

        extract_email_from_html(&self.email_regex, &body)
            .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
    }
}

/// Scans the document's text nodes in order and returns the first match.
/// At most one email per site is ever returned.
fn extract_email_from_html(email_regex: &Regex, body: &str) -> Option<String> {
    let document = Html::parse_document(body);
    for node in document.root_element().text() {
        if let Some(found) = email_regex.find(node) {
            return Some(found.as_str().to_string());
        }
    }
    None
}
