//! Fetch-and-parse primitive.
//!
//! [`Fetcher`] issues exactly one HTTP GET per call and hands back either the
//! decoded JSON body or a parsed [`Document`]. It neither retries nor caches.
//! Every failure (bad URL, transport error, non-2xx status, undecodable body)
//! is reported as [`NpmError::RemoteUnavailable`].

use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::parse::Document;
use crate::{NpmError, Result};

/// How a response body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Decode the body as JSON.
    Json,
    /// Parse the body as an HTML document.
    Document,
}

/// A fetched and decoded response body.
pub enum Fetched {
    Json(Value),
    Document(Document),
}

/// Thin wrapper over a `reqwest::Client` that speaks in [`NpmError`].
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Wraps an already configured HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Gets the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches `url` and decodes the body according to `mode`.
    pub async fn fetch(&self, url: &str, mode: FetchMode) -> Result<Fetched> {
        match mode {
            FetchMode::Json => self.fetch_json(url).await.map(Fetched::Json),
            FetchMode::Document => self.fetch_document(url).await.map(Fetched::Document),
        }
    }

    /// Fetches `url` and decodes the body as JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        let body = self.get(url, FetchMode::Json).await?;
        serde_json::from_str(&body).map_err(|e| unavailable(url, e))
    }

    /// Fetches `url` and parses the body as an HTML document.
    pub async fn fetch_document(&self, url: &str) -> Result<Document> {
        let body = self.get(url, FetchMode::Document).await?;
        Ok(Document::parse(&body))
    }

    async fn get(&self, url: &str, mode: FetchMode) -> Result<String> {
        let parsed_url = Url::parse(url).map_err(|e| unavailable(url, e))?;
        let accept = match mode {
            FetchMode::Json => "application/json",
            FetchMode::Document => "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        };

        tracing::debug!(%parsed_url, ?mode, "fetching");

        let response = self
            .client
            .get(parsed_url)
            .header("Accept", accept)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| unavailable(url, e))?
            .error_for_status()
            .map_err(|e| unavailable(url, e))?;

        response.text().await.map_err(|e| unavailable(url, e))
    }
}

fn unavailable(url: &str, reason: impl std::fmt::Display) -> NpmError {
    NpmError::RemoteUnavailable { url: url.to_string(), reason: reason.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> Fetcher {
        Fetcher::new(Client::new())
    }

    #[tokio::test]
    async fn test_fetch_url_invalid() {
        let result = fetcher().fetch_json("not-a-url").await;
        assert!(matches!(result, Err(NpmError::RemoteUnavailable { ref url, .. }) if url == "not-a-url"));
    }

    #[tokio::test]
    async fn test_fetch_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/status.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": {"indicator": "none"}})))
            .expect(1)
            .mount(&server)
            .await;

        let value = fetcher().fetch_json(&format!("{}/status.json", server.uri())).await.unwrap();
        assert_eq!(value["status"]["indicator"], "none");
    }

    #[tokio::test]
    async fn test_fetch_document_mode() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><head><title>Page</title></head></html>"))
            .mount(&server)
            .await;

        let fetched = fetcher().fetch(&format!("{}/page", server.uri()), FetchMode::Document).await.unwrap();
        match fetched {
            Fetched::Document(doc) => assert_eq!(doc.title(), Some("Page".to_string())),
            Fetched::Json(_) => panic!("expected a document"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = fetcher().fetch_document(&format!("{}/anything", server.uri())).await;
        assert!(matches!(result, Err(NpmError::RemoteUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let result = fetcher().fetch_json(&server.uri()).await;
        assert!(matches!(result, Err(NpmError::RemoteUnavailable { .. })));
    }
}
