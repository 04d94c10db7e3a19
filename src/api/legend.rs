use serde::{Deserialize, Serialize};

use crate::interaction::{LegendKey, VisibilityState};

/// Which action the bulk entry currently offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkToggleLabel {
    /// At least one series is hidden; clicking shows all.
    SelectAll,
    /// Nothing is hidden; clicking hides all.
    DeselectAll,
}

impl BulkToggleLabel {
    #[must_use]
    pub fn for_state(visibility: &VisibilityState) -> Self {
        if visibility.any_hidden() {
            Self::SelectAll
        } else {
            Self::DeselectAll
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendEntry {
    Bulk {
        label: BulkToggleLabel,
    },
    Series {
        error_type_id: String,
        /// Position in the error type list, used to pick the series color.
        series_index: usize,
        hidden: bool,
    },
}

impl LegendEntry {
    /// Key forwarded to the controller when this entry is clicked.
    ///
    /// Routes the same way as a raw id click, so a series named `"all"`
    /// maps to the bulk entry.
    #[must_use]
    pub fn key(&self) -> LegendKey {
        match self {
            Self::Bulk { .. } => LegendKey::All,
            Self::Series { error_type_id, .. } => LegendKey::from_id(error_type_id),
        }
    }
}

/// Bulk entry first, then one entry per error type in legend order.
#[must_use]
pub fn build_legend(error_types: &[String], visibility: &VisibilityState) -> Vec<LegendEntry> {
    let mut entries = Vec::with_capacity(error_types.len() + 1);
    entries.push(LegendEntry::Bulk {
        label: BulkToggleLabel::for_state(visibility),
    });
    entries.extend(
        error_types
            .iter()
            .enumerate()
            .map(|(series_index, error_type_id)| LegendEntry::Series {
                error_type_id: error_type_id.clone(),
                series_index,
                hidden: visibility.is_hidden(error_type_id),
            }),
    );
    entries
}
