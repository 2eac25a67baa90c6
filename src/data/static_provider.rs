use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::data::{FetchRequest, MarketDataProvider, NoDataError, NoDataReason};
use crate::models::PriceSeries;

/// In-memory provider: canned series per symbol, everything else is empty.
///
/// Counts calls and remembers the last request, so callers can verify when
/// a fetch did (or did not) happen.
#[derive(Default)]
pub struct StaticProvider {
    series: HashMap<String, PriceSeries>,
    failures: HashMap<String, String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<FetchRequest>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.series.insert(series.symbol.clone(), series);
        self
    }

    /// Every fetch of `symbol` fails as if the transport broke.
    pub fn with_failure(mut self, symbol: impl Into<String>, detail: impl Into<String>) -> Self {
        self.failures.insert(symbol.into(), detail.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<FetchRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl MarketDataProvider for StaticProvider {
    async fn fetch(&self, request: &FetchRequest) -> Result<PriceSeries, NoDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }

        if let Some(detail) = self.failures.get(&request.symbol) {
            return Err(NoDataError::new(request, NoDataReason::FetchFailed(detail.clone())));
        }
        match self.series.get(&request.symbol) {
            Some(series) if !series.is_empty() => Ok(series.clone()),
            _ => Err(NoDataError::empty(request)),
        }
    }
}
