//! Extraction rules: pure projections from a parsed page to typed records.
//!
//! Each submodule covers one page family and declares the selectors it relies
//! on as constants. Rules never touch the network, so they can be exercised
//! against saved pages. A node that a rule cannot find yields an empty value,
//! not an error; only an invalid selector
//! ([`NpmError::InvalidSelector`](crate::NpmError::InvalidSelector)) fails.

pub mod normalize;
pub mod package;
pub mod search;
pub mod status;
pub mod user;

pub use normalize::{DEFAULT_SIDEBAR_KEY, normalize_label, sidebar_key};
pub use package::{DependencySet, PackageSnippet};
pub use search::SearchResult;
pub use status::{IncidentAction, IncidentDetail};
pub use user::{Connection, UserSnippet};
