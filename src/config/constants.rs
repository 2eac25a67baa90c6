//! Top level constants

/// Symbol shown on first launch when none is given on the command line.
pub const DEFAULT_SYMBOL: &str = "EURUSD=X";

pub mod bollinger {
    /// Rolling window (bars) for the moving average and standard deviation.
    pub const WINDOW: usize = 20;
    /// Band half-width, in standard deviations.
    pub const NUM_STD_DEV: f64 = 2.0;
    /// Decimal places kept on the rolling standard deviation.
    pub const STD_DEV_DECIMALS: i32 = 3;
    /// Sample standard deviation is undefined below two points.
    pub const MIN_WINDOW: usize = 2;
}

/// Appended to every degraded-mode banner. Currency pairs need the `=X` suffix.
pub const FOREX_SUFFIX_HINT: &str =
    "moreover check if INPUT='EURUSD=X' whilst entering forex pairs, 'EURUSD' is wrong";

/// A fetch + indicator job slower than this (micros) is reported by `trace_time!`.
pub const SLOW_FETCH_THRESHOLD_MICROS: u128 = 3_000_000;
