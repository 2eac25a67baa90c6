use std::ops::RangeInclusive;
use std::sync::Arc;

use eframe::egui::{RichText, Ui, Vec2b};
use egui_plot::{Axis, AxisHints, Corner, GridMark, HPlacement, Legend, Plot, VPlacement};

use crate::config::PlotStyle;
use crate::config::plot::PLOT_CONFIG;
use crate::engine::ChartView;
use crate::models::IndicatorFrame;
use crate::ui::plot_layers::{
    BollingerLayer, CandlestickLayer, CloseLineLayer, LayerContext, OhlcLayer, PlotLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::{TimeUtils, calculate_adaptive_step};

/// Central chart area. Remembers which frame it last framed so user zoom
/// survives repaints but a new frame always starts fully in view.
#[derive(Default)]
pub struct PlotView {
    framed: Option<Arc<IndicatorFrame>>,
}

// Helper to build the Time Axis: x values are bar indices, labels are bar dates
fn create_time_axis(frame: &Arc<IndicatorFrame>, intraday: bool) -> AxisHints<'static> {
    let frame = Arc::clone(frame);

    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > f64::EPSILON {
                return String::new();
            }
            match frame.series().timestamps.get(idx as usize) {
                Some(&ts) => TimeUtils::epoch_ms_to_axis_label(ts, intraday),
                None => String::new(),
            }
        })
        .placement(VPlacement::Bottom)
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Right)
}

/// X extent: every bar index plus configured padding on both sides.
pub(crate) fn x_bounds(bar_count: usize) -> RangeInclusive<f64> {
    let last = bar_count.saturating_sub(1) as f64;
    let pad = (last * PLOT_CONFIG.plot_x_padding_pct).max(1.0);
    (-pad)..=(last + pad)
}

/// Y extent: prices and defined band values, padded top and bottom.
pub(crate) fn y_bounds(frame: &IndicatorFrame) -> Option<RangeInclusive<f64>> {
    let (low, high) = frame.price_bounds()?;
    let range = high - low;
    let pad = if range > f64::EPSILON {
        range * PLOT_CONFIG.plot_y_padding_pct
    } else {
        // Flat series: pad relative to price so the line is not glued to an edge
        (high.abs() * PLOT_CONFIG.plot_y_padding_pct).max(f64::EPSILON)
    };
    Some((low - pad)..=(high + pad))
}

impl PlotView {
    pub fn new() -> Self {
        Self { framed: None }
    }

    /// Draws the title and then either the chart or the degraded banner.
    pub fn show(&mut self, ui: &mut Ui, view: &ChartView) {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new(view.title())
                    .color(PLOT_CONFIG.color_text_primary)
                    .strong(),
            );
        });

        match view {
            ChartView::Normal {
                frame,
                style,
                interval,
                ..
            } => self.show_chart(ui, frame, *style, interval.is_intraday()),
            ChartView::Degraded { banner, .. } => {
                // Forget the framing so a recovered chart starts fully in view
                self.framed = None;
                show_banner(ui, banner);
            }
        }
    }

    fn show_chart(
        &mut self,
        ui: &mut Ui,
        frame: &Arc<IndicatorFrame>,
        style: PlotStyle,
        intraday: bool,
    ) {
        let reframe = !self
            .framed
            .as_ref()
            .is_some_and(|prev| Arc::ptr_eq(prev, frame));
        if reframe {
            self.framed = Some(Arc::clone(frame));
        }

        let bar_count = frame.len();
        let x_range = x_bounds(bar_count);
        let y_range = y_bounds(frame);

        Plot::new("price_chart")
            .legend(Legend::default().position(Corner::LeftTop))
            .custom_x_axes(vec![create_time_axis(frame, intraday)])
            .custom_y_axes(vec![create_y_axis()])
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let step = calculate_adaptive_step(max - min, PLOT_CONFIG.time_axis_target_marks, 1.0);

                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .allow_double_click_reset(true)
            .allow_drag(Vec2b { x: true, y: true })
            .allow_zoom(Vec2b { x: true, y: true })
            .show(ui, |plot_ui| {
                if reframe {
                    plot_ui.set_plot_bounds_x(x_range);
                    if let Some(y_range) = y_range {
                        plot_ui.set_plot_bounds_y(y_range);
                    }
                }

                let ctx = LayerContext { frame };

                // --- LAYER STACK ---
                let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(2);
                match style {
                    PlotStyle::Candle => layers.push(Box::new(CandlestickLayer)),
                    PlotStyle::Ohlc => layers.push(Box::new(OhlcLayer)),
                    PlotStyle::Line => layers.push(Box::new(CloseLineLayer)),
                }
                // Overlays on top
                layers.push(Box::new(BollingerLayer));

                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            });
    }
}

fn show_banner(ui: &mut Ui, banner: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new(format!("{} {}", UI_TEXT.icon_warning, banner))
                .color(PLOT_CONFIG.color_banner)
                .size(PLOT_CONFIG.banner_font_size),
        );
    });
}
