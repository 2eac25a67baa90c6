use serde::{Deserialize, Serialize};

use crate::config::{ChartInterval, ChartPeriod, DEFAULT_SYMBOL, PlotStyle};

/// Everything the user can change from the control panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChartParameters {
    pub symbol: String,
    pub period: ChartPeriod,
    pub interval: ChartInterval,
    pub plot_style: PlotStyle,
}

impl ChartParameters {
    pub fn for_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }
}

impl Default for ChartParameters {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            period: ChartPeriod::default(),
            interval: ChartInterval::default(),
            plot_style: PlotStyle::default(),
        }
    }
}

impl std::fmt::Display for ChartParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (period {}, interval {}, style {})",
            self.symbol, self.period, self.interval, self.plot_style
        )
    }
}
