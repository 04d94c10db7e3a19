mod chart_config;
mod chart_snapshot;
mod json_contract;
mod legend;
mod micro_stop_chart;
mod tooltip;

pub use chart_config::{MicroStopChartConfig, TooltipOrder};
pub use chart_snapshot::{BucketStack, ChartSnapshot};
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1, error_records_to_json_pretty,
    parse_error_records,
};
pub use legend::{BulkToggleLabel, LegendEntry, build_legend};
pub use micro_stop_chart::MicroStopChart;
pub use tooltip::{TooltipItem, tooltip_items};
