use thiserror::Error;

use crate::config::{ChartInterval, ChartPeriod};
use crate::data::FetchRequest;

/// Why a fetch produced nothing usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoDataReason {
    /// Transport, HTTP status, decode or upstream API failure.
    FetchFailed(String),
    /// The request went through but carried zero usable bars.
    Empty,
}

/// The only error the chart core ever sees from a data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.symbol, .period, .interval, .reason))]
pub struct NoDataError {
    pub symbol: String,
    pub period: ChartPeriod,
    pub interval: ChartInterval,
    pub reason: NoDataReason,
}

fn describe(
    symbol: &str,
    period: &ChartPeriod,
    interval: &ChartInterval,
    reason: &NoDataReason,
) -> String {
    match reason {
        NoDataReason::FetchFailed(detail) => format!(
            "Error fetching data for '{}' ({}, {}): {}",
            symbol, period, interval, detail
        ),
        NoDataReason::Empty => format!(
            "No data fetched for ticker symbol '{}' ({}, {}). Check the ticker symbol.",
            symbol, period, interval
        ),
    }
}

impl NoDataError {
    pub fn new(request: &FetchRequest, reason: NoDataReason) -> Self {
        Self {
            symbol: request.symbol.clone(),
            period: request.period,
            interval: request.interval,
            reason,
        }
    }

    pub fn empty(request: &FetchRequest) -> Self {
        Self::new(request, NoDataReason::Empty)
    }

    pub fn fetch_failed(request: &FetchRequest, detail: impl std::fmt::Display) -> Self {
        Self::new(request, NoDataReason::FetchFailed(detail.to_string()))
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self.reason, NoDataReason::Empty)
    }
}
