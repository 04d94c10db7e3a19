use tracing::{debug, trace};

use crate::core::{
    AggregatedSeries, DateBucket, ErrorRecord, aggregate, stack_bucket, visible_total,
};
use crate::interaction::{LegendKey, VisibilityState};

use super::{
    BucketStack, ChartSnapshot, LegendEntry, MicroStopChartConfig, TooltipItem, build_legend,
    tooltip_items,
};

/// Headless controller behind the micro-stop stacked bar chart.
///
/// Owns the aggregated series of the current record set and the per-series
/// hidden flags. The renderer reads from it and forwards legend clicks back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MicroStopChart {
    config: MicroStopChartConfig,
    series: AggregatedSeries,
    visibility: VisibilityState,
}

impl MicroStopChart {
    #[must_use]
    pub fn new(config: MicroStopChartConfig) -> Self {
        Self {
            config,
            series: AggregatedSeries::default(),
            visibility: VisibilityState::default(),
        }
    }

    /// Builds a controller already loaded with `records`.
    #[must_use]
    pub fn with_records(config: MicroStopChartConfig, records: &[ErrorRecord]) -> Self {
        let mut chart = Self::new(config);
        chart.set_records(records);
        chart
    }

    /// Replaces the record set and re-aggregates.
    ///
    /// Hidden flags survive when the distinct error types are unchanged and
    /// are reset to all visible otherwise. Returns whether a reset happened.
    pub fn set_records(&mut self, records: &[ErrorRecord]) -> bool {
        let series = aggregate(records);
        let reset = series.error_types != self.series.error_types;
        if reset {
            self.visibility = VisibilityState::initialize(&series.error_types);
        }
        debug!(
            record_count = records.len(),
            bucket_count = series.buckets.len(),
            error_type_count = series.error_types.len(),
            visibility_reset = reset,
            "set micro-stop records"
        );
        self.series = series;
        reset
    }

    /// Drops all data; equivalent to loading an empty record set.
    pub fn clear(&mut self) {
        self.set_records(&[]);
    }

    #[must_use]
    pub fn config(&self) -> MicroStopChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: MicroStopChartConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn series(&self) -> &AggregatedSeries {
        &self.series
    }

    #[must_use]
    pub fn buckets(&self) -> &[DateBucket] {
        &self.series.buckets
    }

    #[must_use]
    pub fn error_types(&self) -> &[String] {
        &self.series.error_types
    }

    #[must_use]
    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    /// Routes a legend click by raw id (`"all"` or an error type id).
    pub fn handle_legend_click(&mut self, id: &str) -> &VisibilityState {
        self.apply_legend_key(&LegendKey::from_id(id))
    }

    pub fn apply_legend_key(&mut self, key: &LegendKey) -> &VisibilityState {
        self.visibility = self.visibility.toggled_for(
            key,
            &self.series.error_types,
            self.config.unknown_legend_key_policy,
        );
        trace!(
            key = %key,
            hidden_count = self.visibility.hidden_count(),
            "applied legend click"
        );
        &self.visibility
    }

    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        build_legend(&self.series.error_types, &self.visibility)
    }

    /// Error types currently drawn, in legend order.
    #[must_use]
    pub fn visible_error_types(&self) -> Vec<&str> {
        self.series
            .error_types
            .iter()
            .map(String::as_str)
            .filter(|error_type_id| !self.visibility.is_hidden(error_type_id))
            .collect()
    }

    #[must_use]
    pub fn stack(&self, date: &str) -> Option<BucketStack> {
        self.series.bucket(date).map(|bucket| self.stack_for(bucket))
    }

    #[must_use]
    pub fn stacks(&self) -> Vec<BucketStack> {
        self.series
            .buckets
            .iter()
            .map(|bucket| self.stack_for(bucket))
            .collect()
    }

    /// Tooltip rows for `date`, or `None` when no bucket has that key.
    #[must_use]
    pub fn tooltip(&self, date: &str) -> Option<Vec<TooltipItem>> {
        self.series.bucket(date).map(|bucket| {
            tooltip_items(
                bucket,
                &self.series.error_types,
                &self.visibility,
                self.config.tooltip_order,
            )
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            error_types: self.series.error_types.clone(),
            buckets: self.series.buckets.clone(),
            visibility: self.visibility.clone(),
            legend: self.legend(),
            stacks: self.stacks(),
        }
    }

    fn stack_for(&self, bucket: &DateBucket) -> BucketStack {
        let segments = stack_bucket(bucket, &self.series.error_types, &self.visibility);
        BucketStack {
            date: bucket.date.clone(),
            visible_total: visible_total(&segments),
            segments,
        }
    }
}
