//! Normalization of heterogeneous raw alert records into [`DisplayAlert`].
//!
//! Pure and side-effect free: "today" is an explicit parameter, so the same
//! input always yields the same output. Data-quality problems the component
//! can default around never surface as errors; only a missing mandatory
//! field rejects a record, and rejection is per-record — one bad entry does
//! not abort the batch.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::alert::{
    Category, DisplayAlert, RawAlert, RawTaskAlert, RawWatchAlert, ReadStatus, SeverityTier,
};
use crate::guidance::{deadline_summary, official_source_url, urgency_analysis};
use crate::rank::rank;
use crate::text::truncate_chars;

/// Watch titles are cut to this many characters (plus ellipsis).
const TITLE_MAX_CHARS: usize = 100;

/// Placeholder source link when the upstream record carries none.
const SOURCE_URL_PLACEHOLDER: &str = "#";

/// Watch title when neither the title field nor the summary's first line
/// has any text.
const WATCH_TITLE_FALLBACK: &str = "Alerte réglementaire";

/// Category keyword table, checked in order against the lowercased
/// candidate text. First match wins; no match means fiscal.
const CATEGORY_KEYWORDS: &[(&[&str], Category)] = &[
    (&["social", "rh"], Category::Rh),
    (&["juridique", "legal"], Category::Juridique),
    (&["aide", "subvention"], Category::Aides),
];

/// Body-text precedence for watch notices: the AI analysis when one was
/// generated, then the raw summary, then the legacy message field.
const WATCH_BODY_SOURCES: [fn(&RawWatchAlert) -> Option<&str>; 3] = [
    |a| a.ai_analysis.as_deref(),
    |a| a.summary.as_deref(),
    |a| a.message.as_deref(),
];

/// Which collaborator family a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertFamily {
    Task,
    Watch,
}

impl AlertFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Watch => "watch",
        }
    }
}

impl fmt::Display for AlertFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record missing a mandatory identifying field.
///
/// This is a contract violation by the upstream collaborator; the caller
/// drops the record (and may log it) while siblings normalize normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {family} alert `{id}`: missing or invalid `{field}`")]
pub struct MalformedRecord {
    pub id: String,
    pub family: AlertFamily,
    pub field: &'static str,
}

/// Result of normalizing a batch: ranked valid alerts plus the records
/// that had to be dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub alerts: Vec<DisplayAlert>,
    pub rejected: Vec<MalformedRecord>,
}

/// Normalize one raw record of either family.
pub fn normalize(raw: &RawAlert, today: NaiveDate) -> Result<DisplayAlert, MalformedRecord> {
    match raw {
        RawAlert::Task(a) => normalize_task(a, today),
        RawAlert::Watch(a) => normalize_watch(a),
    }
}

/// Normalize a whole batch with per-record failure isolation, then rank.
///
/// N raw records with one malformed entry yield N−1 alerts and one entry
/// in `rejected`, never an all-or-nothing abort.
pub fn normalize_batch(raws: &[RawAlert], today: NaiveDate) -> BatchOutcome {
    let mut alerts = Vec::with_capacity(raws.len());
    let mut rejected = Vec::new();

    for raw in raws {
        match normalize(raw, today) {
            Ok(alert) => alerts.push(alert),
            Err(err) => rejected.push(err),
        }
    }

    BatchOutcome {
        alerts: rank(alerts),
        rejected,
    }
}

// ── Task family ──

fn normalize_task(raw: &RawTaskAlert, today: NaiveDate) -> Result<DisplayAlert, MalformedRecord> {
    let task_id = raw
        .task_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(&raw.id, AlertFamily::Task, "task_id"))?;

    let due_date = raw
        .due_date
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(|| malformed(&raw.id, AlertFamily::Task, "due_date"))?;

    // Trust the engine's precomputation when present; otherwise a pure
    // calendar-day difference (both dates at midnight, so due-today is 0).
    let days_remaining = raw
        .days_remaining
        .unwrap_or_else(|| (due_date - today).num_days());

    let task_name = humanize_task_id(task_id);
    let base_message = raw
        .message
        .clone()
        .unwrap_or_else(|| format!("Tâche {task_id} à traiter"));
    let category_text = format!("{task_id} {base_message}");

    Ok(DisplayAlert {
        id: raw.id.clone(),
        title: task_title(raw, &task_name, days_remaining),
        category: infer_category(Some(category_text.as_str())),
        severity: task_severity(raw.severity.as_deref()),
        days_remaining: Some(days_remaining),
        message: deadline_summary(&base_message, due_date, days_remaining),
        analysis: Some(urgency_analysis(&task_name, days_remaining)),
        source_url: official_source_url(task_id).to_string(),
        status: ReadStatus::Unread,
        actions: Vec::new(),
        detected_date: raw.received_at.clone(),
    })
}

/// Title template keyed by `alert_type`.
fn task_title(raw: &RawTaskAlert, task_name: &str, days_remaining: i64) -> String {
    let days = crate::text::day_count(days_remaining);
    match raw.alert_type.as_deref() {
        Some("deadline_critical") | Some("D-1") => {
            format!("🚨 Échéance critique dans {days} — {task_name}")
        }
        Some("deadline_approaching") | Some("D-7") => {
            format!("⏰ Échéance dans {days} — {task_name}")
        }
        Some("overdue") => format!("❌ Tâche en retard — {task_name}"),
        _ => raw
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("📋 {task_name}")),
    }
}

/// "task_test_7_days" → "Test 7 Days".
fn humanize_task_id(task_id: &str) -> String {
    task_id
        .strip_prefix("task_")
        .unwrap_or(task_id)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `critical|error → critical`, `high → high`, `warning|medium → medium`,
/// everything else (`info|low|unset|unknown`) → low.
fn task_severity(severity: Option<&str>) -> SeverityTier {
    match severity.map(str::to_ascii_lowercase).as_deref() {
        Some("critical") | Some("error") => SeverityTier::Critical,
        Some("high") => SeverityTier::High,
        Some("warning") | Some("medium") => SeverityTier::Medium,
        _ => SeverityTier::Low,
    }
}

// ── Watch family ──

fn normalize_watch(raw: &RawWatchAlert) -> Result<DisplayAlert, MalformedRecord> {
    let summary = raw
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(&raw.id, AlertFamily::Watch, "summary"))?;

    let detected_date = raw
        .detected_date
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| malformed(&raw.id, AlertFamily::Watch, "detectedDate"))?;

    // A summary can start with a newline, leaving an empty first line.
    let title_source = raw
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .or_else(|| summary.lines().next().filter(|l| !l.is_empty()))
        .unwrap_or(WATCH_TITLE_FALLBACK);

    let category_candidate = raw
        .category
        .as_deref()
        .or_else(|| raw.tags.as_deref().and_then(|t| t.first()).map(String::as_str));

    let message = first_present(raw, &WATCH_BODY_SOURCES)
        .unwrap_or_default()
        .to_string();

    Ok(DisplayAlert {
        id: raw.id.clone(),
        title: truncate_chars(title_source, TITLE_MAX_CHARS),
        category: infer_category(category_candidate),
        severity: watch_severity(raw.priority, raw.score),
        days_remaining: None,
        message,
        analysis: raw.ai_analysis.clone(),
        source_url: raw
            .source_url
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| SOURCE_URL_PLACEHOLDER.to_string()),
        status: read_status(raw.status.as_deref()),
        actions: raw.actions.clone().unwrap_or_default(),
        detected_date: Some(detected_date.to_string()),
    })
}

/// `priority ≤ 1 → high`, `== 2 → medium`, `≥ 3 → low`; with no priority,
/// a relevance score above 0.7 promotes to high, otherwise medium.
fn watch_severity(priority: Option<i64>, score: Option<f64>) -> SeverityTier {
    match priority {
        Some(p) if p <= 1 => SeverityTier::High,
        Some(2) => SeverityTier::Medium,
        Some(_) => SeverityTier::Low,
        None => match score {
            Some(s) if s > 0.7 => SeverityTier::High,
            _ => SeverityTier::Medium,
        },
    }
}

/// `lu|read → read`; anything else, including absent, is unread.
fn read_status(status: Option<&str>) -> ReadStatus {
    match status {
        Some("lu") | Some("read") => ReadStatus::Read,
        _ => ReadStatus::Unread,
    }
}

// ── Shared helpers ──

fn malformed(id: &str, family: AlertFamily, field: &'static str) -> MalformedRecord {
    MalformedRecord {
        id: id.to_string(),
        family,
        field,
    }
}

/// Keyword-based category inference; no candidate or no match means fiscal.
fn infer_category(candidate: Option<&str>) -> Category {
    let Some(text) = candidate else {
        return Category::Fiscal;
    };
    let text = text.to_lowercase();
    for (keywords, category) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }
    Category::Fiscal
}

/// Evaluate accessor functions in order until one yields a present value.
fn first_present<'a, T>(
    record: &'a T,
    sources: &[for<'r> fn(&'r T) -> Option<&'r str>],
) -> Option<&'a str> {
    sources
        .iter()
        .find_map(|get| get(record).filter(|s| !s.is_empty()))
}

/// Accepts plain ISO dates, RFC 3339 timestamps, and naive timestamps.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}
