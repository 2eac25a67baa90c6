use eframe::egui::{Color32, Stroke};
use egui_plot::{Line, LineStyle, PlotPoints, PlotUi, Polygon};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::CandleType;
use crate::models::IndicatorFrame;
use crate::ui::ui_text::UI_TEXT;

/// Context passed to every layer during rendering.
/// X coordinates are bar indices, so gaps in trading hours never show up as empty space.
pub struct LayerContext<'a> {
    pub frame: &'a IndicatorFrame,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// PRICE LAYERS (exactly one of these is drawn, per plot style)
// ============================================================================

pub struct CandlestickLayer;

impl PlotLayer for CandlestickLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let series = ctx.frame.series();
        for i in 0..series.klines() {
            let candle = series.get_candle(i);
            let x = i as f64;
            let color = candle_color(candle.get_type());

            draw_wick_line(plot_ui, x, candle.high_price, candle.low_price, color);

            let (body_bot, body_top_raw) = candle.body_range();
            // Doji check
            let body_top = if (body_top_raw - body_bot).abs() < f64::EPSILON {
                body_bot * 1.0001
            } else {
                body_top_raw
            };
            draw_body_rect(plot_ui, x, body_top, body_bot, color);
        }
    }
}

pub struct OhlcLayer;

impl PlotLayer for OhlcLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let series = ctx.frame.series();
        let tick = PLOT_CONFIG.ohlc_tick_pct;
        for i in 0..series.klines() {
            let candle = series.get_candle(i);
            let x = i as f64;
            let color = candle_color(candle.get_type());

            let segments = [
                [[x, candle.low_price], [x, candle.high_price]],
                [[x - tick, candle.open_price], [x, candle.open_price]],
                [[x, candle.close_price], [x + tick, candle.close_price]],
            ];
            for seg in segments {
                plot_ui.line(
                    Line::new("", PlotPoints::new(seg.to_vec()))
                        .color(color)
                        .width(PLOT_CONFIG.ohlc_bar_width),
                );
            }
        }
    }
}

pub struct CloseLineLayer;

impl PlotLayer for CloseLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let points: Vec<[f64; 2]> = ctx
            .frame
            .series()
            .close_prices
            .iter()
            .enumerate()
            .map(|(i, &close)| [i as f64, close])
            .collect();

        plot_ui.line(
            Line::new(UI_TEXT.legend_close.as_str(), PlotPoints::new(points))
                .color(PLOT_CONFIG.close_line_color)
                .width(PLOT_CONFIG.close_line_width),
        );
    }
}

// ============================================================================
// BOLLINGER OVERLAY (SMA solid, bands dashed)
// ============================================================================

pub struct BollingerLayer;

impl PlotLayer for BollingerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let dashed = LineStyle::Dashed {
            length: PLOT_CONFIG.band_dash_length,
        };

        draw_optional_series(
            plot_ui,
            &UI_TEXT.legend_upper_band,
            ctx.frame.upper_band(),
            PLOT_CONFIG.upper_band_color,
            dashed,
        );
        draw_optional_series(
            plot_ui,
            &UI_TEXT.legend_lower_band,
            ctx.frame.lower_band(),
            PLOT_CONFIG.lower_band_color,
            dashed,
        );
        draw_optional_series(
            plot_ui,
            &UI_TEXT.legend_sma,
            ctx.frame.moving_average(),
            PLOT_CONFIG.sma_color,
            LineStyle::Solid,
        );
    }
}

/// Splits an optional column into runs of defined values.
/// Undefined rows break the line instead of being drawn as zero.
pub(crate) fn defined_runs(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (i, v) in values.iter().enumerate() {
        match v {
            Some(y) => current.push([i as f64, *y]),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

// --- HELPERS ---

fn draw_optional_series(
    plot_ui: &mut PlotUi,
    name: &str,
    values: &[Option<f64>],
    color: Color32,
    style: LineStyle,
) {
    // Every run shares the name, so the legend shows a single entry
    for run in defined_runs(values) {
        plot_ui.line(
            Line::new(name, PlotPoints::new(run))
                .color(color)
                .style(style)
                .width(PLOT_CONFIG.indicator_line_width),
        );
    }
}

fn candle_color(kind: CandleType) -> Color32 {
    match kind {
        CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    }
}

#[inline]
fn draw_wick_line(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    ui.line(
        Line::new("", PlotPoints::new(vec![[x, bottom], [x, top]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );
}

#[inline]
fn draw_body_rect(ui: &mut PlotUi, x: f64, top: f64, bottom: f64, color: Color32) {
    let half_w = PLOT_CONFIG.candle_width_pct / 2.0;
    let pts = vec![
        [x - half_w, bottom],
        [x + half_w, bottom],
        [x + half_w, top],
        [x - half_w, top],
    ];

    // No stroke: borders blur on thin candles
    ui.polygon(
        Polygon::new("", PlotPoints::new(pts))
            .fill_color(color)
            .stroke(Stroke::NONE),
    );
}
