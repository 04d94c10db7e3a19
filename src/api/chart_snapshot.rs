use serde::{Deserialize, Serialize};

use crate::core::{DateBucket, StackSegment};
use crate::interaction::VisibilityState;

use super::LegendEntry;

/// Stacked bar for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStack {
    pub date: String,
    pub segments: Vec<StackSegment>,
    pub visible_total: u64,
}

/// Everything a renderer needs to draw the chart at one point in time.
///
/// Callers redraw when two consecutive snapshots compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub error_types: Vec<String>,
    pub buckets: Vec<DateBucket>,
    pub visibility: VisibilityState,
    pub legend: Vec<LegendEntry>,
    pub stacks: Vec<BucketStack>,
}
