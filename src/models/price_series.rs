use serde::{Deserialize, Serialize};

use crate::domain::Candle;

/// Ordered-by-time OHLCV table for one symbol.
///
/// Columnar layout: every `Vec` has the same length and index `i` is bar `i`.
/// Timestamps are strictly increasing. Build through [`PriceSeries::from_candles`],
/// which is the only place that invariant is established.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub symbol: String,
    pub timestamps: Vec<i64>,
    pub open_prices: Vec<f64>,
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            timestamps: vec![],
            open_prices: vec![],
            high_prices: vec![],
            low_prices: vec![],
            close_prices: vec![],
            volumes: vec![],
        }
    }

    /// Sorts by timestamp, drops bars with non-finite prices, and keeps the
    /// last bar when a timestamp repeats.
    pub fn from_candles(symbol: impl Into<String>, mut candles: Vec<Candle>) -> Self {
        candles.retain(Candle::is_finite);
        // Stable: among equal timestamps the later arrival stays last.
        candles.sort_by_key(|c| c.timestamp_ms);

        let mut series = Self::empty(symbol);
        let len = candles.len();
        series.timestamps.reserve(len);
        series.open_prices.reserve(len);
        series.high_prices.reserve(len);
        series.low_prices.reserve(len);
        series.close_prices.reserve(len);
        series.volumes.reserve(len);

        for c in candles {
            if series.timestamps.last() == Some(&c.timestamp_ms) {
                let last_idx = series.timestamps.len() - 1;
                series.open_prices[last_idx] = c.open_price;
                series.high_prices[last_idx] = c.high_price;
                series.low_prices[last_idx] = c.low_price;
                series.close_prices[last_idx] = c.close_price;
                series.volumes[last_idx] = c.volume;
                continue;
            }
            series.timestamps.push(c.timestamp_ms);
            series.open_prices.push(c.open_price);
            series.high_prices.push(c.high_price);
            series.low_prices.push(c.low_price);
            series.close_prices.push(c.close_price);
            series.volumes.push(c.volume);
        }
        series
    }

    /// Flat bars (open = high = low = close) spaced `step_ms` apart.
    /// Handy wherever only closes matter, e.g. indicator fixtures.
    pub fn from_closes(symbol: impl Into<String>, closes: &[f64], start_ms: i64, step_ms: i64) -> Self {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Candle::new(start_ms + i as i64 * step_ms, c, c, c, c, 0.0))
            .collect();
        Self::from_candles(symbol, candles)
    }

    /// Number of bars
    pub fn klines(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn get_candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.open_prices[idx],
            self.high_prices[idx],
            self.low_prices[idx],
            self.close_prices[idx],
            self.volumes[idx],
        )
    }

    /// (lowest low, highest high), or None for an empty series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let low = self.low_prices.iter().copied().fold(f64::INFINITY, f64::min);
        let high = self.high_prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((low, high))
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn any_price() -> impl Strategy<Value = f64> {
        prop_oneof![
            8 => 0.01f64..10_000.0,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
        ]
    }

    fn any_candle() -> impl Strategy<Value = Candle> {
        // Narrow timestamp range so duplicates are common
        (0i64..50, any_price(), 0.0f64..1_000.0)
            .prop_map(|(ts, close, volume)| Candle::new(ts * 60_000, close, close, close, close, volume))
    }

    proptest! {
        #[test]
        fn test_from_candles_is_strictly_increasing(
            candles in prop::collection::vec(any_candle(), 0..120),
        ) {
            let series = PriceSeries::from_candles("PROP", candles.clone());

            prop_assert!(series.timestamps.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(series.close_prices.iter().all(|c| c.is_finite()));
            for column in [&series.open_prices, &series.high_prices, &series.low_prices, &series.volumes] {
                prop_assert_eq!(column.len(), series.klines());
            }

            // Exactly one bar per distinct timestamp among the finite inputs
            let mut distinct: Vec<i64> = candles
                .iter()
                .filter(|c| c.is_finite())
                .map(|c| c.timestamp_ms)
                .collect();
            distinct.sort_unstable();
            distinct.dedup();
            prop_assert_eq!(&series.timestamps, &distinct);
        }

        #[test]
        fn test_last_finite_duplicate_wins(
            candles in prop::collection::vec(any_candle(), 1..120),
        ) {
            let series = PriceSeries::from_candles("PROP", candles.clone());
            for (idx, ts) in series.timestamps.iter().enumerate() {
                let last = candles
                    .iter()
                    .rfind(|c| c.is_finite() && c.timestamp_ms == *ts);
                prop_assert_eq!(last.map(|c| c.close_price), Some(series.close_prices[idx]));
            }
        }
    }
}
