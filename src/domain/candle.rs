#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    pub volume: f64,
}

impl Candle {
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp_ms,
            open_price: open,
            high_price: high,
            low_price: low,
            close_price: close,
            volume,
        }
    }

    /// A doji (close == open) counts as bullish.
    pub fn get_type(&self) -> CandleType {
        if self.close_price < self.open_price {
            return CandleType::Bearish;
        }
        CandleType::Bullish
    }

    /// (bottom, top) of the body
    pub fn body_range(&self) -> (f64, f64) {
        (
            self.open_price.min(self.close_price),
            self.open_price.max(self.close_price),
        )
    }

    /// All four prices finite. Upstream feeds occasionally carry NaN rows.
    pub fn is_finite(&self) -> bool {
        self.open_price.is_finite()
            && self.high_price.is_finite()
            && self.low_price.is_finite()
            && self.close_price.is_finite()
    }
}
