pub mod aggregation;
pub mod stacking;
pub mod types;

pub use aggregation::{AggregatedSeries, DATE_FIELD, DateBucket, aggregate};
pub use stacking::{StackSegment, stack_bucket, visible_total};
pub use types::{ErrorRecord, TIMESTAMP_LABEL_FORMAT, date_key};
