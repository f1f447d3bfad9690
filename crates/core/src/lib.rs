pub mod client;
pub mod endpoints;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod markdown;
pub mod package;
pub mod parse;
pub mod status;
pub mod user;

pub use client::{ClientConfig, ClientConfigBuilder, DEFAULT_USER_AGENT, NpmClient};
pub use endpoints::{Endpoints, SearchEndpoint, StatusResource};
pub use error::{NpmError, Result};
pub use extract::{
    Connection, DependencySet, IncidentAction, IncidentDetail, PackageSnippet, SearchResult, UserSnippet,
    normalize_label,
};
pub use fetch::{FetchMode, Fetched, Fetcher};
pub use markdown::{MarkdownOptions, html_to_markdown};
pub use package::{Package, Ranking, ReadmeFormat, SearchOptions};
pub use parse::{Document, Element};
pub use status::StatusMonitor;
pub use user::User;
