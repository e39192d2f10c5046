//! Raw alert record families and the unified display model.
//!
//! Two collaborator backends emit alerts with different shapes: the
//! alert-engine ties alerts to compliance tasks with a due date, the
//! regulatory-watch ("veille") backend surfaces news items with no deadline.
//! Both are normalized into [`DisplayAlert`] for presentation.

use serde::{Deserialize, Serialize};

/// A task-deadline alert as emitted by the alert-engine endpoint.
///
/// Upstream is sloppy about which fields it populates, so everything that
/// has been observed absent is an `Option`. `task_id` and `due_date` are
/// contractually mandatory; their absence is rejected at normalization,
/// not at deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTaskAlert {
    pub id: String,
    pub task_id: Option<String>,
    /// Free-form discriminator: `deadline_critical`, `D-7`, `overdue`, ...
    pub alert_type: Option<String>,
    /// `low|medium|high|critical|warning|info`; unknown values degrade to low.
    pub severity: Option<String>,
    pub message: Option<String>,
    pub title: Option<String>,
    /// ISO date or RFC 3339 timestamp string.
    pub due_date: Option<String>,
    /// Precomputed by the engine; trusted verbatim when present.
    pub days_remaining: Option<i64>,
    pub received_at: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// A regulatory-watch notice as stored by the veille backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWatchAlert {
    pub id: String,
    /// Free-text body; the first line doubles as the title. Mandatory.
    pub summary: Option<String>,
    /// Mandatory.
    pub detected_date: Option<String>,
    pub source_url: Option<String>,
    pub category: Option<String>,
    /// Numeric priority, 0 = highest.
    pub priority: Option<i64>,
    /// Relevance score in [0, 1].
    pub score: Option<f64>,
    pub tags: Option<Vec<String>>,
    /// Recommended next steps.
    pub actions: Option<Vec<String>>,
    /// `"nouveau"|"lu"` (or `"new"|"read"`).
    pub status: Option<String>,
    pub ai_analysis: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
}

/// A raw record tagged by which collaborator family it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAlert {
    Task(RawTaskAlert),
    Watch(RawWatchAlert),
}

impl RawAlert {
    /// Upstream record id, carried through normalization unchanged.
    pub fn id(&self) -> &str {
        match self {
            Self::Task(a) => &a.id,
            Self::Watch(a) => &a.id,
        }
    }
}

/// Display category inferred from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fiscal,
    Rh,
    Juridique,
    Aides,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiscal => "fiscal",
            Self::Rh => "rh",
            Self::Juridique => "juridique",
            Self::Aides => "aides",
        }
    }
}

/// Unified four-level severity, regardless of source family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Critical,
    High,
    Medium,
    Low,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Numeric sort weight: critical=4, high=3, medium=2, low=1.
    pub fn weight(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// Read/unread state of a watch notice. Task alerts start unread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadStatus {
    Unread,
    Read,
}

/// The normalized, display-ready alert.
///
/// A pure projection of one raw record: recomputed on every fetch,
/// never mutated, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayAlert {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub severity: SeverityTier,
    /// Calendar days until the deadline; `None` for watch notices,
    /// which carry no deadline. Past-due is zero or negative.
    pub days_remaining: Option<i64>,
    /// Best-available body text.
    pub message: String,
    /// AI-generated contextual analysis, when one exists.
    pub analysis: Option<String>,
    pub source_url: String,
    pub status: ReadStatus,
    pub actions: Vec<String>,
    pub detected_date: Option<String>,
}
