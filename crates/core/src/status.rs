//! Registry status page operations.
//!
//! Eight operations pass the status page's JSON API through untouched; the
//! ninth, [`StatusMonitor::incident`], reads an incident's HTML detail page.
//! Any failure is reported as [`NpmError::MonitorUnavailable`].
//!
//! # Example
//!
//! ```rust,no_run
//! use npmscrape_core::NpmClient;
//!
//! # async fn example() -> npmscrape_core::Result<()> {
//! let client = NpmClient::new()?;
//! let status = client.status().overall().await?;
//! println!("{}", status["status"]["description"]);
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::client::NpmClient;
use crate::endpoints::StatusResource;
use crate::extract::{self, IncidentDetail};
use crate::{NpmError, Result};

/// Read-only view of the status page, borrowed from an [`NpmClient`].
#[derive(Debug, Clone, Copy)]
pub struct StatusMonitor<'a> {
    client: &'a NpmClient,
}

impl<'a> StatusMonitor<'a> {
    pub(crate) fn new(client: &'a NpmClient) -> Self {
        Self { client }
    }

    /// Fetches one JSON resource as published.
    pub async fn resource(&self, resource: StatusResource) -> Result<Value> {
        let url = self.client.endpoints().status_resource(resource);
        self.client
            .fetcher()
            .fetch_json(&url)
            .await
            .map_err(|e| e.into_monitor_unavailable(resource.path()))
    }

    /// Overall status indicator.
    pub async fn overall(&self) -> Result<Value> {
        self.resource(StatusResource::Status).await
    }

    /// Status indicator, component statuses, unresolved incidents and any
    /// upcoming or in-progress scheduled maintenances.
    pub async fn summary(&self) -> Result<Value> {
        self.resource(StatusResource::Summary).await
    }

    /// Components with their status: operational, degraded_performance,
    /// partial_outage or major_outage.
    pub async fn components(&self) -> Result<Value> {
        self.resource(StatusResource::Components).await
    }

    /// Incidents in the Investigating, Identified or Monitoring state.
    pub async fn unresolved_incidents(&self) -> Result<Value> {
        self.resource(StatusResource::UnresolvedIncidents).await
    }

    /// The 50 most recent incidents, resolved ones included.
    pub async fn incidents(&self) -> Result<Value> {
        self.resource(StatusResource::Incidents).await
    }

    /// Planned outages, upgrades and infrastructure notices.
    pub async fn scheduled_maintenances(&self) -> Result<Value> {
        self.resource(StatusResource::ScheduledMaintenances).await
    }

    /// Maintenances still in the Scheduled state.
    pub async fn upcoming_scheduled_maintenances(&self) -> Result<Value> {
        self.resource(StatusResource::UpcomingScheduledMaintenances).await
    }

    /// Maintenances In Progress or Verifying.
    pub async fn active_scheduled_maintenances(&self) -> Result<Value> {
        self.resource(StatusResource::ActiveScheduledMaintenances).await
    }

    /// Fetches the headline and published updates of one incident.
    ///
    /// # Errors
    ///
    /// [`NpmError::InvalidArgument`] for an empty `uuid`, without touching the
    /// network; [`NpmError::MonitorUnavailable`] for any other failure.
    pub async fn incident(&self, uuid: &str) -> Result<IncidentDetail> {
        if uuid.is_empty() {
            return Err(NpmError::InvalidArgument("incident uuid"));
        }

        let url = self.client.endpoints().status_incident(uuid);
        let subject = format!("incident {uuid}");
        let doc = self
            .client
            .fetcher()
            .fetch_document(&url)
            .await
            .map_err(|e| e.into_monitor_unavailable(&subject))?;
        extract::status::incident(&doc).map_err(|e| e.into_monitor_unavailable(&subject))
    }
}
