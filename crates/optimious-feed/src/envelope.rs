//! Typed envelopes for the two collaborator feeds.
//!
//! The alert-engine returns `{ alerts: [...], metadata: {...} }`; the veille
//! backend returns `{ success: bool, alertes: [...], total: int }`. Transport
//! is owned by the caller; this module only parses payloads it is handed.

use serde::Deserialize;
use thiserror::Error;

use optimious_core::{RawAlert, RawTaskAlert, RawWatchAlert};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("veille feed reported failure (total {total})")]
    WatchFailed { total: u64 },
}

/// Cache/refresh bookkeeping the alert-engine sends alongside its alerts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    pub count: u64,
    pub last_refresh: f64,
    pub time_since_refresh: f64,
    pub ttl: u64,
    pub timestamp: f64,
    pub mode: String,
}

/// `GET /api/alerts` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskAlertEnvelope {
    pub alerts: Vec<RawTaskAlert>,
    #[serde(default)]
    pub metadata: FeedMetadata,
}

impl TaskAlertEnvelope {
    pub fn into_raw_alerts(self) -> Vec<RawAlert> {
        self.alerts.into_iter().map(RawAlert::Task).collect()
    }
}

/// `GET /veille/company/{id}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchEnvelope {
    pub success: bool,
    pub alertes: Vec<RawWatchAlert>,
    pub total: u64,
}

impl WatchEnvelope {
    /// Unwraps the alert list, rejecting envelopes the backend itself
    /// flagged as failed.
    pub fn into_raw_alerts(self) -> Result<Vec<RawAlert>, FeedError> {
        if !self.success {
            return Err(FeedError::WatchFailed { total: self.total });
        }
        Ok(self.alertes.into_iter().map(RawAlert::Watch).collect())
    }
}

pub fn parse_task_envelope(body: &str) -> Result<TaskAlertEnvelope, FeedError> {
    Ok(serde_json::from_str(body)?)
}

pub fn parse_watch_envelope(body: &str) -> Result<WatchEnvelope, FeedError> {
    Ok(serde_json::from_str(body)?)
}

/// Merge both families into one tagged sequence, task alerts first,
/// preserving each feed's arrival order.
pub fn merge_feeds(tasks: Vec<RawAlert>, watches: Vec<RawAlert>) -> Vec<RawAlert> {
    let mut merged = tasks;
    merged.extend(watches);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK_BODY: &str = r#"{
        "alerts": [
            {
                "id": "alert_001",
                "task_id": "task_declaration_tva",
                "alert_type": "deadline_approaching",
                "severity": "high",
                "due_date": "2026-09-01",
                "days_remaining": 7
            },
            {
                "id": "alert_002",
                "task_id": "task_bilan",
                "alert_type": "overdue",
                "severity": "critical",
                "due_date": "2026-08-10"
            }
        ],
        "metadata": {
            "count": 2,
            "last_refresh": 1756022400.0,
            "time_since_refresh": 12.5,
            "ttl": 300,
            "timestamp": 1756022412.5,
            "mode": "background"
        }
    }"#;

    const WATCH_BODY: &str = r#"{
        "success": true,
        "alertes": [
            {
                "id": "veille_42",
                "summary": "Nouveau plafond URSSAF",
                "detectedDate": "2026-08-20T10:30:00Z",
                "sourceUrl": "https://www.urssaf.fr/actualite",
                "priority": 1,
                "tags": ["RH"],
                "status": "nouveau"
            }
        ],
        "total": 1
    }"#;

    #[test]
    fn parses_task_envelope() {
        let env = parse_task_envelope(TASK_BODY).unwrap();
        assert_eq!(env.alerts.len(), 2);
        assert_eq!(env.metadata.count, 2);
        assert_eq!(env.metadata.mode, "background");
        assert_eq!(env.alerts[1].id, "alert_002");
    }

    #[test]
    fn task_envelope_without_metadata() {
        let env = parse_task_envelope(r#"{"alerts": []}"#).unwrap();
        assert!(env.alerts.is_empty());
        assert_eq!(env.metadata.count, 0);
    }

    #[test]
    fn parses_watch_envelope() {
        let env = parse_watch_envelope(WATCH_BODY).unwrap();
        assert!(env.success);
        assert_eq!(env.total, 1);
        assert_eq!(env.alertes[0].priority, Some(1));
    }

    #[test]
    fn failed_watch_envelope_is_an_error() {
        let env = parse_watch_envelope(r#"{"success": false, "alertes": [], "total": 0}"#).unwrap();
        let err = env.into_raw_alerts().unwrap_err();
        assert!(matches!(err, FeedError::WatchFailed { total: 0 }));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            parse_task_envelope("<html>502</html>"),
            Err(FeedError::Json(_))
        ));
    }

    #[test]
    fn merge_keeps_arrival_order() {
        let tasks = parse_task_envelope(TASK_BODY).unwrap().into_raw_alerts();
        let watches = parse_watch_envelope(WATCH_BODY)
            .unwrap()
            .into_raw_alerts()
            .unwrap();
        let merged = merge_feeds(tasks, watches);
        let ids: Vec<&str> = merged.iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["alert_001", "alert_002", "veille_42"]);
    }
}
