//! Chart parameter enums (the fixed option sets offered by the control panel)

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Lookback range accepted by the chart API (`range=` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum ChartPeriod {
    D1,
    D5,
    #[default]
    Mo1,
    Mo3,
    Mo6,
    Y1,
    Y2,
    Y5,
    Y10,
    Ytd,
    Max,
}

impl ChartPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::Mo1 => "1mo",
            Self::Mo3 => "3mo",
            Self::Mo6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling interval of each bar (`interval=` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum ChartInterval {
    M1,
    M2,
    M5,
    #[default]
    M15,
    M30,
    M60,
    M90,
    H1,
    D1,
    D5,
    Wk1,
    Mo1,
    Mo3,
}

impl ChartInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M2 => "2m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::M60 => "60m",
            Self::M90 => "90m",
            Self::H1 => "1h",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::Wk1 => "1wk",
            Self::Mo1 => "1mo",
            Self::Mo3 => "3mo",
        }
    }

    /// True for sub-daily bars, where the time axis should carry a clock time.
    pub fn is_intraday(&self) -> bool {
        matches!(
            self,
            Self::M1 | Self::M2 | Self::M5 | Self::M15 | Self::M30 | Self::M60 | Self::M90 | Self::H1
        )
    }
}

impl std::fmt::Display for ChartInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the price series itself is drawn. Overlays are drawn the same way in every style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Default)]
pub enum PlotStyle {
    #[default]
    Candle,
    Line,
    Ohlc,
}

impl PlotStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Candle => "candle",
            Self::Line => "line",
            Self::Ohlc => "ohlc",
        }
    }
}

impl std::fmt::Display for PlotStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
