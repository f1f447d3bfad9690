//! Base URLs for every resource the client reads.
//!
//! The defaults point at the public npm website and its status page. Swap the
//! whole [`Endpoints`] value through [`ClientConfig`](crate::ClientConfig) to
//! target a mirror or a local test server.

use serde::{Deserialize, Serialize};

/// Base URL and parameter names of the package search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEndpoint {
    /// Search page URL, without a query string.
    pub base: String,
    /// Free-text query parameter.
    pub query: String,
    /// Ranking parameter.
    pub ranking: String,
    /// Page number parameter.
    pub page: String,
    /// Results-per-page parameter.
    pub per_page: String,
}

impl Default for SearchEndpoint {
    fn default() -> Self {
        Self {
            base: "https://www.npmjs.com/search".to_string(),
            query: "q".to_string(),
            ranking: "ranking".to_string(),
            page: "page".to_string(),
            per_page: "perPage".to_string(),
        }
    }
}

/// Static mapping from logical resources to URL prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// Package page prefix; the package name is appended verbatim.
    pub package: String,
    /// User profile prefix; the username is appended verbatim.
    pub user: String,
    /// Package search page.
    pub search: SearchEndpoint,
    /// Status page root, ending in `/`.
    pub status: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            package: "https://www.npmjs.com/package/".to_string(),
            user: "https://www.npmjs.com/~".to_string(),
            search: SearchEndpoint::default(),
            status: "https://status.npmjs.org/".to_string(),
        }
    }
}

impl Endpoints {
    /// Points every resource at `root`, keeping the default path layout.
    ///
    /// Useful for mirrors that reproduce npm's URL structure under another host.
    pub fn with_root(root: &str) -> Self {
        let root = root.trim_end_matches('/');
        Self {
            package: format!("{root}/package/"),
            user: format!("{root}/~"),
            search: SearchEndpoint { base: format!("{root}/search"), ..SearchEndpoint::default() },
            status: format!("{root}/status/"),
        }
    }

    /// URL of a JSON resource on the status page.
    pub fn status_resource(&self, resource: StatusResource) -> String {
        format!("{}{}", self.status, resource.path())
    }

    /// URL of the HTML detail page of one incident.
    pub fn status_incident(&self, uuid: &str) -> String {
        format!("{}incidents/{}", self.status, uuid)
    }
}

/// The JSON documents published by the status page API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusResource {
    /// Overall status indicator.
    Status,
    /// Indicator, components, unresolved incidents and maintenances in one document.
    Summary,
    /// Every component with its status.
    Components,
    /// Incidents still investigating, identified or monitoring.
    UnresolvedIncidents,
    /// The 50 most recent incidents.
    Incidents,
    /// All scheduled maintenances.
    ScheduledMaintenances,
    /// Maintenances still in the scheduled state.
    UpcomingScheduledMaintenances,
    /// Maintenances in progress or verifying.
    ActiveScheduledMaintenances,
}

impl StatusResource {
    /// Every resource, in the order the status API documents them.
    pub const ALL: [StatusResource; 8] = [
        StatusResource::Status,
        StatusResource::Summary,
        StatusResource::Components,
        StatusResource::UnresolvedIncidents,
        StatusResource::Incidents,
        StatusResource::ScheduledMaintenances,
        StatusResource::UpcomingScheduledMaintenances,
        StatusResource::ActiveScheduledMaintenances,
    ];

    /// Path relative to the status page root.
    pub fn path(self) -> &'static str {
        match self {
            StatusResource::Status => "api/v2/status.json",
            StatusResource::Summary => "api/v2/summary.json",
            StatusResource::Components => "api/v2/components.json",
            StatusResource::UnresolvedIncidents => "api/v2/incidents/unresolved.json",
            StatusResource::Incidents => "api/v2/incidents.json",
            StatusResource::ScheduledMaintenances => "api/v2/scheduled-maintenances.json",
            StatusResource::UpcomingScheduledMaintenances => "api/v2/scheduled-maintenances/upcoming.json",
            StatusResource::ActiveScheduledMaintenances => "api/v2/scheduled-maintenances/active.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.package, "https://www.npmjs.com/package/");
        assert_eq!(endpoints.search.per_page, "perPage");
        assert!(endpoints.status.ends_with('/'));
    }

    #[test]
    fn test_with_root() {
        let endpoints = Endpoints::with_root("http://127.0.0.1:8080/");
        assert_eq!(endpoints.package, "http://127.0.0.1:8080/package/");
        assert_eq!(endpoints.user, "http://127.0.0.1:8080/~");
        assert_eq!(endpoints.search.base, "http://127.0.0.1:8080/search");
        assert_eq!(endpoints.status, "http://127.0.0.1:8080/status/");
    }

    #[test]
    fn test_status_urls() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.status_resource(StatusResource::UnresolvedIncidents),
            "https://status.npmjs.org/api/v2/incidents/unresolved.json"
        );
        assert_eq!(
            endpoints.status_incident("abc123"),
            "https://status.npmjs.org/incidents/abc123"
        );
    }

    #[test]
    fn test_status_paths_are_distinct() {
        let mut paths: Vec<_> = StatusResource::ALL.iter().map(|r| r.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 8);
    }
}
