//! Web page scraping: the text of every `<p>` element, joined by spaces.

use super::{LoadError, LoadedDocument};
use crate::engine::config::WebConfig;
use lazy_static::lazy_static;
use reqwest::blocking::Client;
use reqwest::Url;
use scraper::{Html, Selector};
use std::time::Duration;

lazy_static! {
    static ref PARAGRAPH: Selector = Selector::parse("p").expect("`p` is a valid selector");
}

/// Parses user input as an http(s) URL, defaulting the scheme to https.
pub fn normalize_url(input: &str) -> Result<Url, LoadError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LoadError::InvalidUrl(input.to_string()));
    }

    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    };

    let url = Url::parse(&candidate).map_err(|e| LoadError::InvalidUrl(format!("{input}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(LoadError::InvalidUrl(format!(
            "{input}: unsupported scheme {other}"
        ))),
    }
}

/// Concatenated text content of all paragraph elements.
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document
        .select(&PARAGRAPH)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fetches `input` and returns its paragraph text.
///
/// Transport failures and non-success statuses are errors; the caller's
/// state is untouched either way.
pub fn fetch(input: &str, config: &WebConfig) -> Result<LoadedDocument, LoadError> {
    let url = normalize_url(input)?;

    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str());
    if is_loopback(&url) {
        builder = builder.no_proxy();
    }
    let client = builder.build()?;

    log::info!("Fetching {}", url);
    let html = client.get(url.clone()).send()?.error_for_status()?.text()?;

    let text = extract_paragraph_text(&html);
    if text.trim().is_empty() {
        return Err(LoadError::EmptySource(url.to_string()));
    }

    Ok(LoadedDocument {
        text,
        source: url.to_string(),
    })
}

fn is_loopback(url: &Url) -> bool {
    matches!(
        url.host_str(),
        Some("localhost") | Some("127.0.0.1") | Some("[::1]")
    )
}
