//! French display-text helpers shared by the normalization templates.

use chrono::{Datelike, NaiveDate};

/// French month names, indexed by `month0`.
const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Truncate to at most `max` characters, appending `...` when the input
/// is longer. Operates on `char` boundaries, never splitting a multibyte
/// character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    let mut chars = s.chars();
    let kept: String = chars.by_ref().take(max).collect();
    if chars.next().is_some() {
        format!("{kept}...")
    } else {
        kept
    }
}

/// Day-count wording: "1 jour", "5 jours".
pub fn day_count(n: i64) -> String {
    if n == 1 {
        "1 jour".to_string()
    } else {
        format!("{n} jours")
    }
}

/// Long-form French date: "5 mars 2026".
pub fn long_date(d: NaiveDate) -> String {
    format!("{} {} {}", d.day(), MONTHS_FR[d.month0() as usize], d.year())
}
