use std::sync::Arc;

use statrs::statistics::Statistics;

use crate::config::constants::bollinger::{MIN_WINDOW, NUM_STD_DEV, STD_DEV_DECIMALS, WINDOW};
use crate::models::{IndicatorFrame, PriceSeries};
use crate::utils::round_dp;

/// Bollinger Bands over a simple moving average of closes.
///
/// Row `i` (for `i >= window - 1`) uses the closes `i - window + 1 ..= i`:
/// the mean is the moving average, the sample standard deviation (rounded to
/// three places) scaled by `num_std_dev` sets the band half-width. Earlier rows
/// stay `None`. A series shorter than `window` therefore yields no derived
/// values at all, which is not an error.
///
/// `window` is raised to 2 when smaller, since a one-point sample has no spread.
pub fn compute_bollinger(series: &Arc<PriceSeries>, window: usize, num_std_dev: f64) -> IndicatorFrame {
    let window = window.max(MIN_WINDOW);
    let closes = &series.close_prices;
    let len = closes.len();

    let mut moving_average = vec![None; len];
    let mut std_dev = vec![None; len];
    let mut upper_band = vec![None; len];
    let mut lower_band = vec![None; len];

    if len >= window {
        for (offset, slice) in closes.windows(window).enumerate() {
            let i = offset + window - 1;
            let mean = slice.iter().mean();
            let sd = round_dp(slice.iter().std_dev(), STD_DEV_DECIMALS);

            moving_average[i] = Some(mean);
            std_dev[i] = Some(sd);
            upper_band[i] = Some(mean + num_std_dev * sd);
            lower_band[i] = Some(mean - num_std_dev * sd);
        }
    }

    IndicatorFrame::new(
        Arc::clone(series),
        window,
        num_std_dev,
        moving_average,
        std_dev,
        upper_band,
        lower_band,
    )
}

/// 20-bar window, 2 standard deviations.
pub fn compute_default_bollinger(series: &Arc<PriceSeries>) -> IndicatorFrame {
    compute_bollinger(series, WINDOW, NUM_STD_DEV)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn fixture_closes() -> Vec<f64> {
        let mut closes: Vec<f64> = (10..=30).map(f64::from).collect();
        closes.extend([29.0, 28.0, 27.0, 26.0]);
        closes
    }

    fn series(closes: &[f64]) -> Arc<PriceSeries> {
        Arc::new(PriceSeries::from_closes("FIXTURE", closes, 0, 60_000))
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        match actual {
            Some(v) => assert!((v - expected).abs() < EPS, "expected {expected}, got {v}"),
            None => panic!("expected {expected}, got None"),
        }
    }

    #[test]
    fn test_reference_fixture() {
        let closes = fixture_closes();
        assert_eq!(closes.len(), 25);
        let frame = compute_default_bollinger(&series(&closes));

        for i in 0..19 {
            assert!(frame.moving_average()[i].is_none(), "row {i} should be undefined");
            assert!(frame.std_dev()[i].is_none());
            assert!(frame.upper_band()[i].is_none());
            assert!(frame.lower_band()[i].is_none());
        }

        // (SMA, STD, Upper, Lower) for rows 19..=24
        let expected = [
            (19.5, 5.916, 31.332, 7.668),
            (20.5, 5.916, 32.332, 8.668),
            (21.4, 5.762, 32.924, 9.876),
            (22.2, 5.493, 33.186, 11.214),
            (22.9, 5.139, 33.178, 12.622),
            (23.5, 4.730, 32.960, 14.040),
        ];
        for (k, (sma, std, upper, lower)) in expected.into_iter().enumerate() {
            let i = 19 + k;
            assert_close(frame.moving_average()[i], sma);
            assert_close(frame.std_dev()[i], std);
            assert_close(frame.upper_band()[i], upper);
            assert_close(frame.lower_band()[i], lower);
        }
        assert_eq!(frame.series().close_prices[19], 29.0);
    }

    #[test]
    fn test_short_series_is_all_undefined() {
        let frame = compute_default_bollinger(&series(&[1.0, 2.0, 3.0]));
        assert_eq!(frame.len(), 3);
        assert!(frame.moving_average().iter().all(Option::is_none));
        assert!(frame.std_dev().iter().all(Option::is_none));
        assert!(frame.upper_band().iter().all(Option::is_none));
        assert!(frame.lower_band().iter().all(Option::is_none));
    }

    #[test]
    fn test_exactly_window_bars_defines_last_row_only() {
        let closes: Vec<f64> = (0..20).map(f64::from).collect();
        let frame = compute_default_bollinger(&series(&closes));
        assert_eq!(frame.warmup_rows(), 19);
        assert!(frame.moving_average()[19].is_some());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = series(&fixture_closes());
        let before = (*input).clone();
        let _ = compute_default_bollinger(&input);
        assert_eq!(*input, before);
    }

    #[test]
    fn test_deterministic() {
        let input = series(&fixture_closes());
        let a = compute_default_bollinger(&input);
        let b = compute_default_bollinger(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_window_below_two_is_raised() {
        let frame = compute_bollinger(&series(&[1.0, 3.0]), 1, 2.0);
        assert_eq!(frame.window(), 2);
        assert_close(frame.moving_average()[1], 2.0);
        assert!(frame.moving_average()[0].is_none());
    }

    #[test]
    fn test_flat_prices_collapse_bands() {
        let frame = compute_bollinger(&series(&[5.0; 4]), 3, 2.0);
        assert_close(frame.std_dev()[3], 0.0);
        assert_close(frame.upper_band()[3], 5.0);
        assert_close(frame.lower_band()[3], 5.0);
    }
}
