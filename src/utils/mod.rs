mod maths_utils;
mod perf;
mod time_utils;

pub use maths_utils::{calculate_adaptive_step, round_dp};
pub use perf::{DEFAULT_TRACE_THRESHOLD_MICROS, report_if_slow};
pub use time_utils::{AppInstant, TimeUtils, format_duration};
