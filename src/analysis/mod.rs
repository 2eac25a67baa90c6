mod bollinger;

pub use bollinger::{compute_bollinger, compute_default_bollinger};
