use indexmap::{IndexMap, IndexSet};
use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use tracing::{debug, warn};

use crate::core::ErrorRecord;
use crate::interaction::BULK_TOGGLE_ID;

/// Column holding the date key in a serialized [`DateBucket`] row.
pub const DATE_FIELD: &str = "date";

/// Summed counts per error type for one date key.
///
/// Serializes flat, one row per date: `{"date":"12-01","X":5,"Y":3}`.
/// Serialization fails when an error type is itself named `"date"`, since
/// the row could not be read back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateBucket {
    pub date: String,
    #[serde(flatten)]
    pub counts: IndexMap<String, u64>,
}

impl DateBucket {
    #[must_use]
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            counts: IndexMap::new(),
        }
    }

    /// Count for `error_type_id`, `0` when the type has no record on this date.
    #[must_use]
    pub fn count(&self, error_type_id: &str) -> u64 {
        self.counts.get(error_type_id).copied().unwrap_or(0)
    }

    /// Sum over every error type in the bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    fn add(&mut self, error_type_id: &str, count: u64) {
        let slot = self.counts.entry(error_type_id.to_owned()).or_insert(0);
        *slot = slot.saturating_add(count);
    }
}

impl Serialize for DateBucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.counts.contains_key(DATE_FIELD) {
            return Err(ser::Error::custom(format!(
                "error type id `{DATE_FIELD}` collides with the bucket date field"
            )));
        }
        let mut row = serializer.serialize_map(Some(self.counts.len() + 1))?;
        row.serialize_entry(DATE_FIELD, &self.date)?;
        for (error_type_id, count) in &self.counts {
            row.serialize_entry(error_type_id, count)?;
        }
        row.end()
    }
}

/// Output of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSeries {
    /// Buckets in first-appearance order of their date key.
    pub buckets: Vec<DateBucket>,
    /// Distinct error types in first-appearance order.
    pub error_types: Vec<String>,
}

impl AggregatedSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn bucket(&self, date: &str) -> Option<&DateBucket> {
        self.buckets.iter().find(|bucket| bucket.date == date)
    }

    /// Sum of one error type across every bucket.
    #[must_use]
    pub fn series_total(&self, error_type_id: &str) -> u64 {
        self.buckets
            .iter()
            .map(|bucket| bucket.count(error_type_id))
            .sum()
    }
}

/// Groups records by date key and sums counts per error type.
///
/// Neither buckets nor error types are sorted: both keep the order in which
/// the input first mentions them.
#[must_use]
pub fn aggregate(records: &[ErrorRecord]) -> AggregatedSeries {
    let mut buckets: IndexMap<&str, DateBucket> = IndexMap::new();
    let mut error_types: IndexSet<&str> = IndexSet::new();

    for record in records {
        let key = record.date_key();
        buckets
            .entry(key)
            .or_insert_with(|| DateBucket::new(key))
            .add(&record.error_type_id, record.count);
        error_types.insert(record.error_type_id.as_str());
    }

    if error_types.contains(BULK_TOGGLE_ID) {
        warn!(
            error_type_id = BULK_TOGGLE_ID,
            "error type shares the bulk legend id and cannot be toggled alone"
        );
    }

    debug!(
        record_count = records.len(),
        bucket_count = buckets.len(),
        error_type_count = error_types.len(),
        "aggregated micro-stop records"
    );

    AggregatedSeries {
        buckets: buckets.into_values().collect(),
        error_types: error_types.into_iter().map(str::to_owned).collect(),
    }
}
