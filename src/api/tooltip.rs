use serde::{Deserialize, Serialize};

use crate::core::DateBucket;
use crate::interaction::VisibilityState;

use super::TooltipOrder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipItem {
    pub error_type_id: String,
    pub series_index: usize,
    pub value: u64,
}

/// Rows shown when hovering `bucket`: visible series with a record that day.
#[must_use]
pub fn tooltip_items(
    bucket: &DateBucket,
    error_types: &[String],
    visibility: &VisibilityState,
    order: TooltipOrder,
) -> Vec<TooltipItem> {
    let mut items: Vec<TooltipItem> = error_types
        .iter()
        .enumerate()
        .filter(|(_, error_type_id)| !visibility.is_hidden(error_type_id))
        .filter_map(|(series_index, error_type_id)| {
            bucket
                .counts
                .get(error_type_id.as_str())
                .map(|&value| TooltipItem {
                    error_type_id: error_type_id.clone(),
                    series_index,
                    value,
                })
        })
        .collect();

    if order == TooltipOrder::ValueDescending {
        // Stable sort, ties stay in series order.
        items.sort_by(|a, b| b.value.cmp(&a.value));
    }
    items
}
