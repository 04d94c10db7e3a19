use serde::{Deserialize, Serialize};

use crate::core::ErrorRecord;
use crate::error::{ChartError, ChartResult};

use super::{ChartSnapshot, MicroStopChart};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

/// Parses a JSON array of `{dttime, errid, total_errcount}` objects.
///
/// Unknown fields are ignored. Failures name the offending array index.
pub fn parse_error_records(input: &str) -> ChartResult<Vec<ErrorRecord>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| ChartError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

pub fn error_records_to_json_pretty(records: &[ErrorRecord]) -> ChartResult<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| ChartError::InvalidData(format!("failed to serialize records: {e}")))
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl MicroStopChart {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    /// Parses `input` with [`parse_error_records`] and loads the result.
    ///
    /// Returns whether the visibility state was reset.
    pub fn set_records_from_json_str(&mut self, input: &str) -> ChartResult<bool> {
        let records = parse_error_records(input)?;
        Ok(self.set_records(&records))
    }
}
