//! Per-fetch adaptation: normalize a merged raw batch, log what was
//! dropped, hand the ranked list to the UI layer.

use chrono::NaiveDate;
use tracing::{info, warn};

use optimious_core::{DisplayAlert, RawAlert, normalize_batch};

/// Adapt one fetch's worth of raw records into the ranked display list.
///
/// Malformed records are dropped and logged at `warn`; valid siblings are
/// unaffected. Called once per fetch resolution — each call's output
/// supersedes the previous list wholesale.
pub fn adapt(raws: &[RawAlert], today: NaiveDate) -> Vec<DisplayAlert> {
    let outcome = normalize_batch(raws, today);

    for rejection in &outcome.rejected {
        warn!(
            id = %rejection.id,
            family = %rejection.family,
            field = rejection.field,
            "dropping malformed alert record"
        );
    }
    info!(
        accepted = outcome.alerts.len(),
        rejected = outcome.rejected.len(),
        "alert batch adapted"
    );

    outcome.alerts
}

/// [`adapt`] with the system clock's local date. The explicit-date variant
/// is the one to use anywhere determinism matters.
pub fn adapt_now(raws: &[RawAlert]) -> Vec<DisplayAlert> {
    adapt(raws, chrono::Local::now().date_naive())
}
