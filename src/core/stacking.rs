use serde::{Deserialize, Serialize};

use crate::core::DateBucket;
use crate::interaction::VisibilityState;

/// Value-domain extent of one series inside a stacked bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSegment {
    pub error_type_id: String,
    pub series_index: usize,
    pub base: u64,
    pub top: u64,
}

impl StackSegment {
    #[must_use]
    pub fn value(&self) -> u64 {
        self.top - self.base
    }
}

/// Stacks the visible series of `bucket` in `error_types` order.
///
/// Hidden series and series without a record on this date produce no
/// segment and take no space in the stack.
#[must_use]
pub fn stack_bucket(
    bucket: &DateBucket,
    error_types: &[String],
    visibility: &VisibilityState,
) -> Vec<StackSegment> {
    let mut segments = Vec::with_capacity(error_types.len());
    let mut base = 0_u64;

    for (series_index, error_type_id) in error_types.iter().enumerate() {
        if visibility.is_hidden(error_type_id) {
            continue;
        }
        let Some(&value) = bucket.counts.get(error_type_id.as_str()) else {
            continue;
        };
        let top = base.saturating_add(value);
        segments.push(StackSegment {
            error_type_id: error_type_id.clone(),
            series_index,
            base,
            top,
        });
        base = top;
    }

    segments
}

/// Total height of the stack built by [`stack_bucket`].
#[must_use]
pub fn visible_total(segments: &[StackSegment]) -> u64 {
    segments.last().map_or(0, |segment| segment.top)
}
