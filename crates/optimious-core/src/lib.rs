//! Core alert model and the pure normalization/ranking pipeline.

pub mod alert;
pub mod guidance;
pub mod normalize;
pub mod rank;
pub mod text;

pub use alert::{
    Category, DisplayAlert, RawAlert, RawTaskAlert, RawWatchAlert, ReadStatus, SeverityTier,
};
pub use normalize::{AlertFamily, BatchOutcome, MalformedRecord, normalize, normalize_batch};
pub use rank::{DAYS_SENTINEL, rank};
