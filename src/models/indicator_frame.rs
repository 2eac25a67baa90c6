use std::sync::Arc;

use crate::models::PriceSeries;

/// A price series plus its Bollinger columns, aligned bar-for-bar.
///
/// Derived values are `None` until a full window of history exists.
/// Built by `analysis::compute_bollinger` and never modified afterwards;
/// a recompute produces a new frame.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorFrame {
    series: Arc<PriceSeries>,
    window: usize,
    num_std_dev: f64,
    pub(crate) moving_average: Vec<Option<f64>>,
    pub(crate) std_dev: Vec<Option<f64>>,
    pub(crate) upper_band: Vec<Option<f64>>,
    pub(crate) lower_band: Vec<Option<f64>>,
}

/// One fully expanded row of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub moving_average: Option<f64>,
    pub std_dev: Option<f64>,
    pub upper_band: Option<f64>,
    pub lower_band: Option<f64>,
}

impl IndicatorFrame {
    pub(crate) fn new(
        series: Arc<PriceSeries>,
        window: usize,
        num_std_dev: f64,
        moving_average: Vec<Option<f64>>,
        std_dev: Vec<Option<f64>>,
        upper_band: Vec<Option<f64>>,
        lower_band: Vec<Option<f64>>,
    ) -> Self {
        debug_assert_eq!(moving_average.len(), series.klines());
        debug_assert_eq!(std_dev.len(), series.klines());
        debug_assert_eq!(upper_band.len(), series.klines());
        debug_assert_eq!(lower_band.len(), series.klines());
        Self {
            series,
            window,
            num_std_dev,
            moving_average,
            std_dev,
            upper_band,
            lower_band,
        }
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn symbol(&self) -> &str {
        &self.series.symbol
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn num_std_dev(&self) -> f64 {
        self.num_std_dev
    }

    pub fn len(&self) -> usize {
        self.series.klines()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn moving_average(&self) -> &[Option<f64>] {
        &self.moving_average
    }

    pub fn std_dev(&self) -> &[Option<f64>] {
        &self.std_dev
    }

    pub fn upper_band(&self) -> &[Option<f64>] {
        &self.upper_band
    }

    pub fn lower_band(&self) -> &[Option<f64>] {
        &self.lower_band
    }

    pub fn row(&self, idx: usize) -> Option<FrameRow> {
        if idx >= self.len() {
            return None;
        }
        let s = &self.series;
        Some(FrameRow {
            timestamp_ms: s.timestamps[idx],
            open: s.open_prices[idx],
            high: s.high_prices[idx],
            low: s.low_prices[idx],
            close: s.close_prices[idx],
            volume: s.volumes[idx],
            moving_average: self.moving_average[idx],
            std_dev: self.std_dev[idx],
            upper_band: self.upper_band[idx],
            lower_band: self.lower_band[idx],
        })
    }

    pub fn latest(&self) -> Option<FrameRow> {
        self.len().checked_sub(1).and_then(|idx| self.row(idx))
    }

    /// Number of leading rows without derived values.
    pub fn warmup_rows(&self) -> usize {
        self.moving_average.iter().take_while(|v| v.is_none()).count()
    }

    /// Vertical extent covering every bar and every defined band value.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let (mut low, mut high) = self.series.price_range()?;
        for v in self.upper_band.iter().chain(&self.lower_band).flatten() {
            low = low.min(*v);
            high = high.max(*v);
        }
        Some((low, high))
    }
}
