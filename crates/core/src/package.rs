//! The package entity and its operations.
//!
//! A [`Package`] is only a name and an optional version. Every operation is an
//! independent round trip through the [`NpmClient`] passed to it, and
//! operations that discover other packages or users hand back fresh
//! [`Package`]/[`User`] values that can be queried the same way.
//!
//! # Example
//!
//! ```rust,no_run
//! use npmscrape_core::{NpmClient, Package, SearchOptions};
//!
//! # async fn example() -> npmscrape_core::Result<()> {
//! let client = NpmClient::new()?;
//!
//! let found = Package::search(&client, "json db", &SearchOptions::default()).await?;
//! if let Some(first) = found.packages.first() {
//!     let deps = first.dependencies(&client).await?;
//!     for dep in &deps.normal {
//!         let versions = dep.versions(&client).await?;
//!         println!("{dep}: {} versions", versions.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::NpmClient;
use crate::endpoints::Endpoints;
use crate::extract::{self, DependencySet, PackageSnippet, SearchResult};
use crate::markdown::{MarkdownOptions, html_to_markdown};
use crate::parse::Document;
use crate::user::User;
use crate::{NpmError, Result};

/// Output format of [`Package::readme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadmeFormat {
    /// The readme HTML as rendered on the package page.
    #[default]
    Html,
    /// The readme converted to Markdown.
    Markdown,
}

impl ReadmeFormat {
    /// Reads a format name; `"md"` selects Markdown and anything else HTML.
    pub fn from_name(name: &str) -> Self {
        match name {
            "md" => ReadmeFormat::Markdown,
            _ => ReadmeFormat::Html,
        }
    }
}

/// Sort orders accepted by the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Optimal,
    Popularity,
    Quality,
    Maintenance,
}

impl Ranking {
    /// Reads a ranking name, `None` for anything the search page doesn't know.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "optimal" => Some(Ranking::Optimal),
            "popularity" => Some(Ranking::Popularity),
            "quality" => Some(Ranking::Quality),
            "maintenance" => Some(Ranking::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ranking::Optimal => "optimal",
            Ranking::Popularity => "popularity",
            Ranking::Quality => "quality",
            Ranking::Maintenance => "maintenance",
        }
    }
}

/// Refinements for [`Package::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Keywords every result must carry.
    pub keywords: Vec<String>,
    /// Ranking name; unknown names are ignored.
    pub ranking: Option<String>,
    /// Zero-based results page.
    pub page_number: Option<u32>,
    /// Results per page.
    pub max_results_on_page: Option<u32>,
}

/// An npm package, optionally pinned to a version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Package {
    /// Package name, used verbatim (scoped names included).
    pub name: String,
    /// Version, `None` for the latest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Package {
    /// Creates a package reference for the latest version.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), version: None }
    }

    /// Creates a package reference pinned to `version`.
    pub fn with_version(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self { name: name.into(), version: Some(version.into()) }
    }

    /// The same package, unpinned.
    pub fn latest(&self) -> Self {
        Self::new(self.name.clone())
    }

    /// Path suffix selecting the version: `/v/<version>`, or empty.
    pub fn version_append(&self) -> String {
        match &self.version {
            Some(version) => format!("/v/{version}"),
            None => String::new(),
        }
    }

    /// URL of the main package page, with spaces in the name turned into hyphens.
    pub fn detail_url(&self, endpoints: &Endpoints) -> String {
        format!("{}{}{}", endpoints.package, self.name.replace(' ', "-"), self.version_append())
    }

    /// URL of the package page with the name verbatim, optionally on a tab.
    pub fn tab_url(&self, endpoints: &Endpoints, tab: Option<&str>) -> String {
        let url = format!("{}{}{}", endpoints.package, self.name, self.version_append());
        match tab {
            Some(tab) => format!("{url}?activeTab={tab}"),
            None => url,
        }
    }

    /// Fetches whatever labeled information the package page shows.
    pub async fn snippet(&self, client: &NpmClient) -> Result<PackageSnippet> {
        let url = self.detail_url(client.endpoints());
        self.scrape(client, &url, extract::package::snippet).await
    }

    /// Fetches normal and dev dependencies, each as an unpinned [`Package`].
    pub async fn dependencies(&self, client: &NpmClient) -> Result<DependencySet> {
        let url = self.tab_url(client.endpoints(), Some("dependencies"));
        self.scrape(client, &url, extract::package::dependencies).await
    }

    /// Fetches the readme as HTML or Markdown.
    ///
    /// `options` is handed to the Markdown converter untouched and ignored for HTML.
    /// A page without a readme yields an empty string.
    pub async fn readme(&self, client: &NpmClient, format: ReadmeFormat, options: MarkdownOptions) -> Result<String> {
        let url = self.tab_url(client.endpoints(), None);
        let html = self.scrape(client, &url, extract::package::readme).await?;
        match format {
            ReadmeFormat::Html => Ok(html),
            ReadmeFormat::Markdown => html_to_markdown(&html, options).map_err(|e| e.into_invalid_package(&self.name)),
        }
    }

    /// Fetches the readme HTML.
    pub async fn readme_html(&self, client: &NpmClient) -> Result<String> {
        self.readme(client, ReadmeFormat::Html, MarkdownOptions::default()).await
    }

    /// Fetches the version log, one pinned [`Package`] per published version.
    pub async fn versions(&self, client: &NpmClient) -> Result<Vec<Package>> {
        let url = self.tab_url(client.endpoints(), Some("versions"));
        self.scrape(client, &url, |doc| extract::package::versions(doc, &self.name)).await
    }

    /// Fetches the collaborators listed on the package page.
    pub async fn collaborators(&self, client: &NpmClient) -> Result<Vec<User>> {
        let url = self.tab_url(client.endpoints(), None);
        self.scrape(client, &url, extract::package::collaborators).await
    }

    /// Builds the search page URL for `query`.
    ///
    /// Keywords are appended to the query text as `keywords:a,b`; the ranking is
    /// added only when it is a known one. Every parameter value is
    /// percent-encoded, `%` included.
    pub fn search_url(endpoints: &Endpoints, query: &str, options: &SearchOptions) -> Result<String> {
        let search = &endpoints.search;

        let mut text = query.to_string();
        if !options.keywords.is_empty() {
            text.push_str(&format!(" keywords:{}", options.keywords.join(",")));
        }

        let mut params = vec![(search.query.as_str(), text)];
        if let Some(ranking) = options.ranking.as_deref().and_then(Ranking::from_name) {
            params.push((search.ranking.as_str(), ranking.as_str().to_string()));
        }
        if let Some(page) = options.page_number {
            params.push((search.page.as_str(), page.to_string()));
        }
        if let Some(per_page) = options.max_results_on_page {
            params.push((search.per_page.as_str(), per_page.to_string()));
        }

        Url::parse_with_params(&search.base, &params)
            .map(String::from)
            .map_err(|e| NpmError::RemoteUnavailable { url: search.base.clone(), reason: e.to_string() })
    }

    /// Searches the website for packages.
    ///
    /// # Errors
    ///
    /// [`NpmError::InvalidQuery`] for an empty query, without touching the
    /// network; [`NpmError::SearchUnavailable`] when the page can't be fetched or read.
    pub async fn search(client: &NpmClient, query: &str, options: &SearchOptions) -> Result<SearchResult> {
        if query.is_empty() {
            return Err(NpmError::InvalidQuery);
        }

        let url = Self::search_url(client.endpoints(), query, options).map_err(NpmError::into_search_unavailable)?;
        let doc = client
            .fetcher()
            .fetch_document(&url)
            .await
            .map_err(NpmError::into_search_unavailable)?;
        extract::search::search(&doc).map_err(NpmError::into_search_unavailable)
    }

    async fn scrape<T>(&self, client: &NpmClient, url: &str, rule: impl FnOnce(&Document) -> Result<T>) -> Result<T> {
        let doc = client
            .fetcher()
            .fetch_document(url)
            .await
            .map_err(|e| e.into_invalid_package(&self.name))?;
        rule(&doc).map_err(|e| e.into_invalid_package(&self.name))
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}
