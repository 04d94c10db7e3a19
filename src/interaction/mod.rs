use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// Legend identifier reserved for the bulk show/hide entry.
pub const BULK_TOGGLE_ID: &str = "all";

/// Target of a legend click.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegendKey {
    /// Bulk "select all / deselect all" entry.
    All,
    Series(String),
}

impl LegendKey {
    /// Maps a raw legend id to a key; `"all"` is always the bulk entry.
    ///
    /// An error type whose id is literally `"all"` therefore cannot be
    /// toggled on its own; [`crate::core::aggregate`] warns when it sees one.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        if id == BULK_TOGGLE_ID {
            Self::All
        } else {
            Self::Series(id.to_owned())
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::All => BULK_TOGGLE_ID,
            Self::Series(id) => id,
        }
    }
}

impl fmt::Display for LegendKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<&str> for LegendKey {
    fn from(id: &str) -> Self {
        Self::from_id(id)
    }
}

/// What a toggle does with an id that is not a known error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownLegendKeyPolicy {
    /// Leave the state untouched so its keys keep matching the error types.
    #[default]
    Ignore,
    /// Treat the missing flag as visible and flip it, inserting `hidden = true`.
    Insert,
}

/// Hidden flag per error type, `true` meaning hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilityState {
    hidden: IndexMap<String, bool>,
}

impl VisibilityState {
    /// Every error type starts visible.
    #[must_use]
    pub fn initialize<S: AsRef<str>>(error_types: &[S]) -> Self {
        Self {
            hidden: error_types
                .iter()
                .map(|error_type| (error_type.as_ref().to_owned(), false))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hidden.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_empty()
    }

    #[must_use]
    pub fn contains(&self, error_type_id: &str) -> bool {
        self.hidden.contains_key(error_type_id)
    }

    /// Unknown types read as visible.
    #[must_use]
    pub fn is_hidden(&self, error_type_id: &str) -> bool {
        self.hidden.get(error_type_id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn any_hidden(&self) -> bool {
        self.hidden.values().any(|&hidden| hidden)
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.hidden.values().filter(|&&hidden| hidden).count()
    }

    /// `true` when the keys are exactly `error_types`, in the same order.
    #[must_use]
    pub fn tracks<S: AsRef<str>>(&self, error_types: &[S]) -> bool {
        self.hidden.len() == error_types.len()
            && self
                .hidden
                .keys()
                .zip(error_types)
                .all(|(key, error_type)| key == error_type.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.hidden
            .iter()
            .map(|(error_type, &hidden)| (error_type.as_str(), hidden))
    }

    /// Returns the state after a legend click on `key`; `self` is left as is.
    ///
    /// Same as [`Self::toggled_for`] with the state's own keys as the error
    /// types.
    #[must_use]
    pub fn toggled(&self, key: &LegendKey, policy: UnknownLegendKeyPolicy) -> Self {
        let error_types: Vec<&str> = self.hidden.keys().map(String::as_str).collect();
        self.toggled_for(key, &error_types, policy)
    }

    /// Returns the state after a legend click on `key` for the given
    /// `error_types`; `self` is left as is.
    ///
    /// The bulk entry looks only at `error_types`: it shows every series when
    /// at least one of them is hidden and hides every series otherwise. The
    /// result holds exactly `error_types`, so keys inserted for unknown ids
    /// are dropped. A series entry flips only its own flag.
    #[must_use]
    pub fn toggled_for<S: AsRef<str>>(
        &self,
        key: &LegendKey,
        error_types: &[S],
        policy: UnknownLegendKeyPolicy,
    ) -> Self {
        match key {
            LegendKey::All => {
                let hide = !error_types
                    .iter()
                    .any(|error_type| self.is_hidden(error_type.as_ref()));
                let next = Self {
                    hidden: error_types
                        .iter()
                        .map(|error_type| (error_type.as_ref().to_owned(), hide))
                        .collect(),
                };
                trace!(hide, series_count = next.len(), "bulk legend toggle");
                next
            }
            LegendKey::Series(error_type_id) => {
                let mut next = self.clone();
                match next.hidden.get_mut(error_type_id) {
                    Some(hidden) => {
                        *hidden = !*hidden;
                        trace!(
                            error_type_id = %error_type_id,
                            hidden = *hidden,
                            "series legend toggle"
                        );
                    }
                    None => match policy {
                        UnknownLegendKeyPolicy::Ignore => {
                            warn!(
                                error_type_id = %error_type_id,
                                "ignoring legend toggle for unknown series"
                            );
                        }
                        UnknownLegendKeyPolicy::Insert => {
                            next.hidden.insert(error_type_id.clone(), true);
                            trace!(
                                error_type_id = %error_type_id,
                                "inserted unknown series as hidden"
                            );
                        }
                    },
                }
                next
            }
        }
    }
}

/// Applies a legend click given by its raw id, ignoring unknown series.
#[must_use]
pub fn toggle(state: &VisibilityState, id: &str) -> VisibilityState {
    state.toggled(&LegendKey::from_id(id), UnknownLegendKeyPolicy::Ignore)
}
