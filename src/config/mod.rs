//! Configuration module for the stonks application.

mod debug;
mod types;
mod yahoo;

// Public
pub mod constants;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use constants::DEFAULT_SYMBOL;
pub use debug::{DF, LOG_PERFORMANCE};
pub use types::{ChartInterval, ChartPeriod, PlotStyle};
pub use yahoo::{YAHOO, YahooConfig};
