use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::config::{YAHOO, YahooConfig};
use crate::data::{FetchRequest, MarketDataProvider, NoDataError};
use crate::domain::Candle;
use crate::models::PriceSeries;
use crate::utils::TimeUtils;

// --- Wire format of /v8/finance/chart/{symbol} ---
// Every array entry is nullable: the endpoint pads gaps (halts, holidays) with null.

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartApiError>,
}

#[derive(Debug, Deserialize)]
struct ChartApiError {
    code: Option<String>,
    description: Option<String>,
}

impl std::fmt::Display for ChartApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code = self.code.as_deref().unwrap_or("Error");
        match &self.description {
            Some(desc) => write!(f, "{}: {}", code, desc),
            None => f.write_str(code),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

fn value_at(column: &[Option<f64>], idx: usize) -> Option<f64> {
    column.get(idx).copied().flatten()
}

/// Turns a chart-API response body into a series.
///
/// Rows missing any of open/high/low/close are skipped; a missing volume is 0.
pub(crate) fn decode_chart(request: &FetchRequest, body: &str) -> Result<PriceSeries, NoDataError> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| NoDataError::fetch_failed(request, format!("invalid response: {}", e)))?;

    if let Some(api_error) = envelope.chart.error {
        return Err(NoDataError::fetch_failed(request, api_error));
    }

    let Some(result) = envelope.chart.result.and_then(|r| r.into_iter().next()) else {
        return Err(NoDataError::empty(request));
    };
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Err(NoDataError::empty(request));
    };

    let candles: Vec<Candle> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, &ts_sec)| {
            let open = value_at(&quote.open, i)?;
            let high = value_at(&quote.high, i)?;
            let low = value_at(&quote.low, i)?;
            let close = value_at(&quote.close, i)?;
            let volume = value_at(&quote.volume, i).unwrap_or(0.0);
            Some(Candle::new(ts_sec * TimeUtils::MS_IN_S, open, high, low, close, volume))
        })
        .collect();

    let series = PriceSeries::from_candles(request.symbol.clone(), candles);
    if series.is_empty() {
        return Err(NoDataError::empty(request));
    }
    Ok(series)
}

/// Pulls the `chart.error` text out of a non-2xx body, if there is one.
fn api_error_detail(body: &str) -> Option<String> {
    let envelope: ChartEnvelope = serde_json::from_str(body).ok()?;
    envelope.chart.error.map(|e| e.to_string())
}

/// Yahoo Finance chart endpoint.
pub struct YahooProvider {
    client: Client,
    config: &'static YahooConfig,
}

impl YahooProvider {
    pub fn new() -> Result<Self> {
        Self::with_config(&YAHOO)
    }

    pub fn with_config(config: &'static YahooConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.client.timeout_ms))
            .user_agent(config.client.user_agent)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    pub(crate) fn chart_url(&self, request: &FetchRequest) -> Result<Url, NoDataError> {
        let mut url = Url::parse(self.config.endpoints.base_url)
            .map_err(|e| NoDataError::fetch_failed(request, format!("bad base url: {}", e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| NoDataError::fetch_failed(request, "base url cannot carry a path"))?;
            segments
                .pop_if_empty()
                .extend(self.config.endpoints.chart_path)
                .push(&request.symbol);
        }
        url.query_pairs_mut()
            .append_pair("range", request.period.as_str())
            .append_pair("interval", request.interval.as_str())
            .append_pair("includePrePost", "false");
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    async fn fetch(&self, request: &FetchRequest) -> Result<PriceSeries, NoDataError> {
        let url = self.chart_url(request)?;
        log::info!("Fetching {} from {}", request, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| NoDataError::fetch_failed(request, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NoDataError::fetch_failed(request, e))?;

        if !status.is_success() {
            let detail = api_error_detail(&body).unwrap_or_else(|| format!("HTTP {}", status));
            return Err(NoDataError::fetch_failed(request, detail));
        }

        decode_chart(request, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartInterval, ChartPeriod};
    use crate::data::NoDataReason;

    fn request(symbol: &str) -> FetchRequest {
        FetchRequest {
            symbol: symbol.into(),
            period: ChartPeriod::Mo1,
            interval: ChartInterval::M15,
        }
    }

    const OK_BODY: &str = r#"{
        "chart": {
            "result": [{
                "meta": {"symbol": "AAPL", "currency": "USD"},
                "timestamp": [1709303400, 1709304300, 1709305200],
                "indicators": {
                    "quote": [{
                        "open":   [180.0, null, 181.0],
                        "high":   [181.5, 182.0, 182.5],
                        "low":    [179.5, 180.5, 180.9],
                        "close":  [181.0, 181.5, 182.0],
                        "volume": [1200, 900, null]
                    }]
                }
            }],
            "error": null
        }
    }"#;

    #[test]
    fn test_decode_skips_null_rows() {
        let series = decode_chart(&request("AAPL"), OK_BODY).unwrap();
        assert_eq!(series.symbol, "AAPL");
        assert_eq!(series.timestamps, vec![1_709_303_400_000, 1_709_305_200_000]);
        assert_eq!(series.close_prices, vec![181.0, 182.0]);
        // Null volume defaults to zero
        assert_eq!(series.volumes, vec![1200.0, 0.0]);
    }

    #[test]
    fn test_decode_api_error_is_fetch_failed() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        let err = decode_chart(&request("INVALID"), body).unwrap_err();
        assert_eq!(
            err.reason,
            NoDataReason::FetchFailed("Not Found: No data found, symbol may be delisted".into())
        );
        assert!(err.to_string().contains("INVALID"));
    }

    #[test]
    fn test_decode_without_timestamps_is_empty() {
        let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{}]}}],"error":null}}"#;
        let err = decode_chart(&request("EURUSD=X"), body).unwrap_err();
        assert_eq!(err.reason, NoDataReason::Empty);
    }

    #[test]
    fn test_decode_garbage_is_fetch_failed() {
        let err = decode_chart(&request("AAPL"), "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err.reason, NoDataReason::FetchFailed(_)));
    }

    #[test]
    fn test_api_error_detail() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":null}}}"#;
        assert_eq!(api_error_detail(body), Some("Not Found".into()));
        assert_eq!(api_error_detail("nope"), None);
    }

    #[test]
    fn test_chart_url_keeps_forex_suffix() {
        let provider = YahooProvider::new().unwrap();
        let url = provider.chart_url(&request("EURUSD=X")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/EURUSD=X?range=1mo&interval=15m&includePrePost=false"
        );
    }
}
