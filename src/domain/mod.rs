// Domain types and value objects
mod candle;
mod chart_params;

// Re-export commonly used types
pub use candle::{Candle, CandleType};
pub use chart_params::ChartParameters;
