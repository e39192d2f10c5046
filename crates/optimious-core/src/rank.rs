//! Deterministic presentation order for normalized alerts.
//!
//! Severity dominates; among equal severities the most time-pressured
//! alert comes first. The sort is stable so that re-renders over identical
//! data keep identical order.

use crate::alert::DisplayAlert;

/// Sort position for alerts with no deadline: last among equal-severity peers.
pub const DAYS_SENTINEL: i64 = 999;

/// Rank alerts by descending severity weight, then ascending days remaining.
///
/// Alerts equal on both keys keep their relative input order.
pub fn rank(mut alerts: Vec<DisplayAlert>) -> Vec<DisplayAlert> {
    alerts.sort_by(|a, b| {
        b.severity
            .weight()
            .cmp(&a.severity.weight())
            .then_with(|| sort_days(a).cmp(&sort_days(b)))
    });
    alerts
}

fn sort_days(alert: &DisplayAlert) -> i64 {
    alert.days_remaining.unwrap_or(DAYS_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Category, ReadStatus, SeverityTier};

    fn alert(id: &str, severity: SeverityTier, days: Option<i64>) -> DisplayAlert {
        DisplayAlert {
            id: id.to_string(),
            title: format!("Alerte {id}"),
            category: Category::Fiscal,
            severity,
            days_remaining: days,
            message: String::new(),
            analysis: None,
            source_url: "#".to_string(),
            status: ReadStatus::Unread,
            actions: Vec::new(),
            detected_date: None,
        }
    }

    fn ids(alerts: &[DisplayAlert]) -> Vec<&str> {
        alerts.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn severity_dominates_days() {
        let ranked = rank(vec![
            alert("low", SeverityTier::Low, Some(2)),
            alert("critical", SeverityTier::Critical, Some(10)),
            alert("medium", SeverityTier::Medium, Some(1)),
        ]);
        assert_eq!(ids(&ranked), ["critical", "medium", "low"]);
    }

    #[test]
    fn ties_broken_by_days_ascending() {
        let ranked = rank(vec![
            alert("later", SeverityTier::High, Some(9)),
            alert("soon", SeverityTier::High, Some(1)),
            alert("overdue", SeverityTier::High, Some(-2)),
        ]);
        assert_eq!(ids(&ranked), ["overdue", "soon", "later"]);
    }

    #[test]
    fn no_deadline_sorts_last_among_peers() {
        let ranked = rank(vec![
            alert("watch", SeverityTier::High, None),
            alert("task", SeverityTier::High, Some(30)),
        ]);
        assert_eq!(ids(&ranked), ["task", "watch"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranked = rank(vec![
            alert("first", SeverityTier::Medium, Some(3)),
            alert("second", SeverityTier::Medium, Some(3)),
            alert("third", SeverityTier::Medium, Some(3)),
        ]);
        assert_eq!(ids(&ranked), ["first", "second", "third"]);
    }

    #[test]
    fn no_deadline_ties_keep_input_order() {
        let ranked = rank(vec![
            alert("w1", SeverityTier::Medium, None),
            alert("w2", SeverityTier::Medium, None),
        ]);
        assert_eq!(ids(&ranked), ["w1", "w2"]);
    }

    #[test]
    fn empty_and_single() {
        assert!(rank(Vec::new()).is_empty());
        let ranked = rank(vec![alert("only", SeverityTier::Low, Some(1))]);
        assert_eq!(ids(&ranked), ["only"]);
    }

    #[test]
    fn four_tier_order() {
        let ranked = rank(vec![
            alert("l", SeverityTier::Low, Some(0)),
            alert("m", SeverityTier::Medium, Some(0)),
            alert("h", SeverityTier::High, Some(0)),
            alert("c", SeverityTier::Critical, Some(0)),
        ]);
        assert_eq!(ids(&ranked), ["c", "h", "m", "l"]);
    }
}
