mod indicator_frame;
mod price_series;

pub use indicator_frame::{FrameRow, IndicatorFrame};
pub use price_series::PriceSeries;
