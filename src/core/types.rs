use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp label layout used by the production line exports.
pub const TIMESTAMP_LABEL_FORMAT: &str = "%Y-%m-%d";

/// One micro-stop count for an error type on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(rename = "dttime")]
    pub timestamp: String,
    #[serde(rename = "errid")]
    pub error_type_id: String,
    #[serde(rename = "total_errcount", deserialize_with = "deserialize_count")]
    pub count: u64,
}

impl ErrorRecord {
    #[must_use]
    pub fn new(timestamp: impl Into<String>, error_type_id: impl Into<String>, count: u64) -> Self {
        Self {
            timestamp: timestamp.into(),
            error_type_id: error_type_id.into(),
            count,
        }
    }

    /// Builds a record whose label is `date` rendered as `YYYY-MM-DD`.
    #[must_use]
    pub fn from_date(date: NaiveDate, error_type_id: impl Into<String>, count: u64) -> Self {
        Self::new(
            date.format(TIMESTAMP_LABEL_FORMAT).to_string(),
            error_type_id,
            count,
        )
    }

    /// Bucket key for this record, see [`date_key`].
    #[must_use]
    pub fn date_key(&self) -> &str {
        date_key(&self.timestamp)
    }
}

/// Drops the leading year segment of a `YYYY-MM-DD` label.
///
/// Labels without any `-` separator are returned unchanged.
#[must_use]
pub fn date_key(timestamp: &str) -> &str {
    match timestamp.split_once('-') {
        Some((_, rest)) => rest,
        None => timestamp,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireCount {
    Integer(u64),
    Float(f64),
}

// Exports carry counts as JSON floats (`18.0`); only integral values are accepted.
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match WireCount::deserialize(deserializer)? {
        WireCount::Integer(value) => Ok(value),
        WireCount::Float(value) => {
            // `u64::MAX as f64` rounds up to 2^64, which is itself out of range.
            let in_range = value >= 0.0 && value < u64::MAX as f64;
            if value.is_finite() && in_range && value.fract() == 0.0 {
                Ok(value as u64)
            } else {
                Err(serde::de::Error::custom(format!(
                    "count must be a non-negative integer, got {value}"
                )))
            }
        }
    }
}
