use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{ChartInterval, ChartPeriod};
use crate::data::NoDataError;
use crate::domain::ChartParameters;
use crate::models::PriceSeries;

/// What to fetch. Plot style never takes part in a fetch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub symbol: String,
    pub period: ChartPeriod,
    pub interval: ChartInterval,
}

impl From<&ChartParameters> for FetchRequest {
    fn from(params: &ChartParameters) -> Self {
        Self {
            symbol: params.symbol.clone(),
            period: params.period,
            interval: params.interval,
        }
    }
}

impl FetchRequest {
    pub fn title(&self) -> String {
        format!("{} Price Chart", self.symbol)
    }
}

impl std::fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} [{} @ {}]", self.symbol, self.period, self.interval)
    }
}

/// Abstract interface for fetching market data.
///
/// One attempt per call, no retries. Every failure, whatever its cause, comes
/// back as a `NoDataError`; implementations must not panic on network errors.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<PriceSeries, NoDataError>;
}
