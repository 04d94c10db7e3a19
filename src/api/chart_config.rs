use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::UnknownLegendKeyPolicy;

/// Ordering of tooltip rows for a hovered date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipOrder {
    /// Largest count first; equal counts keep series order.
    #[default]
    ValueDescending,
    /// Same order as the legend.
    Series,
}

/// Controller configuration.
///
/// Serializable so host applications can persist chart setup next to their
/// own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MicroStopChartConfig {
    #[serde(default)]
    pub unknown_legend_key_policy: UnknownLegendKeyPolicy,
    #[serde(default)]
    pub tooltip_order: TooltipOrder,
}

impl MicroStopChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unknown_legend_key_policy(mut self, policy: UnknownLegendKeyPolicy) -> Self {
        self.unknown_legend_key_policy = policy;
        self
    }

    #[must_use]
    pub fn with_tooltip_order(mut self, order: TooltipOrder) -> Self {
        self.tooltip_order = order;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
