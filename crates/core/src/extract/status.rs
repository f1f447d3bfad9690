//! Rules for status page incident detail pages.

use serde::{Deserialize, Serialize};

use crate::parse::Document;
use crate::Result;

/// Page heading; its first child holds the incident headline.
pub const TITLE: &str = ".page-title";
/// One row per published update.
pub const UPDATE_ROWS: &str = ".row.update-row";
pub const UPDATE_TYPE: &str = "div.update-title.span3.font-large";
pub const UPDATE_BODY: &str = "div.update-body.font-regular";
pub const UPDATE_TIMESTAMP: &str = "div.update-timestamp.font-small.color-secondary";

/// One published update of an incident.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentAction {
    /// Update kind, e.g. "Resolved", "Monitoring", "Investigating".
    #[serde(rename = "type")]
    pub kind: String,
    pub summary: String,
    /// Timestamp as printed on the page.
    pub timestamp: String,
}

/// Headline and updates of one incident, updates in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentDetail {
    pub message: String,
    pub actions: Vec<IncidentAction>,
}

/// Extracts an incident detail page.
pub fn incident(doc: &Document) -> Result<IncidentDetail> {
    let message = doc
        .select_first(TITLE)?
        .and_then(|title| title.children().into_iter().next())
        .map(|headline| headline.text_trimmed())
        .unwrap_or_default();

    let actions = doc
        .select(UPDATE_ROWS)?
        .into_iter()
        .map(|row| {
            Ok(IncidentAction {
                kind: row.select_text(UPDATE_TYPE)?.trim().to_string(),
                summary: row.select_text(UPDATE_BODY)?.trim().to_string(),
                timestamp: row.select_text(UPDATE_TIMESTAMP)?.trim().to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(IncidentDetail { message, actions })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident() {
        let html = r#"
            <div class="page-title"><div class="incident-name">Slow installs</div><div>Incident Report</div></div>
            <div class="row update-row">
                <div class="update-title span3 font-large">Resolved</div>
                <div class="update-body font-regular"> All good now. </div>
                <div class="update-timestamp font-small color-secondary">Posted 2 hours ago</div>
            </div>
        "#;
        let detail = incident(&Document::parse(html)).unwrap();
        assert_eq!(detail.message, "Slow installs");
        assert_eq!(
            detail.actions,
            vec![IncidentAction {
                kind: "Resolved".to_string(),
                summary: "All good now.".to_string(),
                timestamp: "Posted 2 hours ago".to_string(),
            }]
        );
    }

    #[test]
    fn test_incident_action_serializes_type() {
        let action = IncidentAction { kind: "Monitoring".to_string(), ..Default::default() };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "Monitoring");
    }

    #[test]
    fn test_incident_without_structure() {
        let detail = incident(&Document::parse("<p>Not found</p>")).unwrap();
        assert!(detail.message.is_empty());
        assert!(detail.actions.is_empty());
    }
}
