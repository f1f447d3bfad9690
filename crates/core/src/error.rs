//! Error types for npmscrape operations.
//!
//! This module defines [`NpmError`], the single error type returned by every
//! public operation. It mixes two groups of variants:
//!
//! - domain kinds (`InvalidPackage`, `InvalidUser`, `MonitorUnavailable`,
//!   `InvalidQuery`, `SearchUnavailable`, `InvalidArgument`) that callers see;
//! - primitive kinds (`RemoteUnavailable`, `InvalidSelector`,
//!   `MarkdownConversion`) raised by fetching, extraction and conversion, which
//!   entity operations collapse into a domain kind before returning.
//!
//! # Example
//!
//! ```rust,no_run
//! use npmscrape_core::{NpmClient, NpmError, Package};
//!
//! # async fn example() -> npmscrape_core::Result<()> {
//! let client = NpmClient::new()?;
//! match Package::new("left-pad").versions(&client).await {
//!     Ok(versions) => println!("{} versions", versions.len()),
//!     Err(NpmError::InvalidPackage { name }) => println!("{name} is probably invalid"),
//!     Err(e) => println!("Error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Main error type for npmscrape operations.
#[derive(Error, Debug)]
pub enum NpmError {
    /// Any failure while operating on a named package.
    #[error("{name} is probably invalid")]
    InvalidPackage { name: String },

    /// Any failure while operating on a named user.
    #[error("{username} is probably invalid")]
    InvalidUser { username: String },

    /// The status page (JSON API or incident pages) could not be reached or parsed.
    #[error("Status monitor unavailable: {0}")]
    MonitorUnavailable(String),

    /// Search was invoked without query text.
    #[error("A search query is required")]
    InvalidQuery,

    /// The search page could not be fetched or parsed.
    #[error("Search is unavailable: the website is down or the results page could not be parsed")]
    SearchUnavailable,

    /// A required identifying argument was empty.
    #[error("Missing required argument: {0}")]
    InvalidArgument(&'static str),

    /// Transport, status or body decoding failure from the fetch primitive.
    #[error("Remote unavailable at {url}: {reason}")]
    RemoteUnavailable { url: String, reason: String },

    /// A CSS selector used by an extraction rule failed to parse.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// The Markdown converter rejected a readme fragment.
    #[error("Markdown conversion failed: {0}")]
    MarkdownConversion(String),
}

impl NpmError {
    /// Collapses any failure into [`NpmError::InvalidPackage`] for `name`.
    pub(crate) fn into_invalid_package(self, name: &str) -> Self {
        if matches!(self, NpmError::InvalidPackage { .. }) {
            return self;
        }
        tracing::warn!(package = name, cause = %self, "package operation failed");
        NpmError::InvalidPackage { name: name.to_string() }
    }

    /// Collapses any failure into [`NpmError::InvalidUser`] for `username`.
    pub(crate) fn into_invalid_user(self, username: &str) -> Self {
        if matches!(self, NpmError::InvalidUser { .. }) {
            return self;
        }
        tracing::warn!(user = username, cause = %self, "user operation failed");
        NpmError::InvalidUser { username: username.to_string() }
    }

    /// Collapses any failure into [`NpmError::MonitorUnavailable`].
    pub(crate) fn into_monitor_unavailable(self, subject: &str) -> Self {
        if matches!(self, NpmError::MonitorUnavailable(_)) {
            return self;
        }
        tracing::warn!(subject, cause = %self, "status monitor operation failed");
        NpmError::MonitorUnavailable(format!("{subject} could not be retrieved"))
    }

    /// Collapses any failure into [`NpmError::SearchUnavailable`].
    pub(crate) fn into_search_unavailable(self) -> Self {
        tracing::warn!(cause = %self, "search failed");
        NpmError::SearchUnavailable
    }
}

/// Result type alias for NpmError.
pub type Result<T> = std::result::Result<T, NpmError>;
