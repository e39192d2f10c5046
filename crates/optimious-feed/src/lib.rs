//! Feed boundary: typed envelopes for the alert-engine and veille backends,
//! plus per-fetch batch adaptation with logging.

pub mod adapt;
pub mod envelope;

pub use adapt::{adapt, adapt_now};
pub use envelope::{
    FeedError, FeedMetadata, TaskAlertEnvelope, WatchEnvelope, merge_feeds, parse_task_envelope,
    parse_watch_envelope,
};
