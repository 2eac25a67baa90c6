use crate::utils::format_duration;

/// Default slow threshold for `trace_time!` when none is given (1ms).
pub const DEFAULT_TRACE_THRESHOLD_MICROS: u128 = 1_000;

/// Times a block and warns when it ran past a threshold in microseconds.
///
/// ```ignore
/// let frame = trace_time!("Compute bands", 500, { compute_default_bollinger(&series) });
/// ```
///
/// The block is inlined, so `.await` and `?` inside it behave as in the caller.
#[macro_export]
macro_rules! trace_time {
    ($name:expr, $block:block) => {
        $crate::trace_time!($name, $crate::utils::DEFAULT_TRACE_THRESHOLD_MICROS, $block)
    };
    ($name:expr, $threshold_micros:expr, $block:block) => {{
        if $crate::config::LOG_PERFORMANCE {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            $crate::utils::report_if_slow($name, start.elapsed().as_micros(), $threshold_micros);
            result
        } else {
            $block
        }
    }};
}

#[doc(hidden)]
pub fn report_if_slow(name: &str, micros: u128, threshold_micros: u128) {
    if micros <= threshold_micros {
        return;
    }
    let mode = if cfg!(debug_assertions) { "DEBUG" } else { "RELEASE" };
    let took = if micros < 1_000 {
        format!("{}us", micros)
    } else {
        format_duration((micros / 1_000) as i64)
    };
    log::warn!(
        "SLOW [{}]: '{}' took {} (threshold {:.3}ms)",
        mode,
        name,
        took,
        threshold_micros as f64 / 1000.0
    );
}
