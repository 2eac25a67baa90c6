use std::sync::Arc;

use crate::config::{ChartInterval, ChartPeriod, PlotStyle};
use crate::data::{FetchRequest, NoDataError};
use crate::models::IndicatorFrame;

/// One user intent coming out of the control panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartCommand {
    SetSymbol(String),
    SetPeriod(ChartPeriod),
    SetInterval(ChartInterval),
    SetPlotStyle(PlotStyle),
}

impl ChartCommand {
    /// Symbol, period and interval change what data is needed; style does not.
    pub fn needs_fetch(&self) -> bool {
        !matches!(self, Self::SetPlotStyle(_))
    }
}

/// A request for the worker to fetch and compute a fresh frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchJob {
    /// Matches `ChartState::generation()` at the moment the job was issued
    pub generation: u64,
    pub request: FetchRequest,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub generation: u64,
    pub request: FetchRequest,
    pub result: Result<Arc<IndicatorFrame>, NoDataError>,
}
