use std::time::Duration;

use eframe::{
    Frame,
    egui::{CentralPanel, Context, RichText, SidePanel, Spinner, TopBottomPanel, Ui},
};

use crate::{
    config::plot::PLOT_CONFIG,
    engine::{ChartEngine, ChartView},
    models::FrameRow,
    ui::{
        ControlsPanel, Panel, PlotView, UI_CONFIG, UI_TEXT, format_bar_count, format_price,
        setup_custom_visuals,
    },
    utils::TimeUtils,
};

/// How often to wake up while a fetch is in flight
const LOADING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct StonksApp {
    pub(crate) engine: ChartEngine,
    pub(crate) plot_view: PlotView,
    /// Draft text of the symbol box; committed on Enter
    pub(crate) symbol_input: String,
}

impl StonksApp {
    pub fn new(cc: &eframe::CreationContext<'_>, engine: ChartEngine) -> Self {
        setup_custom_visuals(&cc.egui_ctx);
        let symbol_input = engine.state().params().symbol.clone();
        Self {
            engine,
            plot_view: PlotView::new(),
            symbol_input,
        }
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        let commands = SidePanel::left("controls_panel")
            .resizable(false)
            .exact_width(UI_CONFIG.side_panel_width)
            .frame(UI_CONFIG.side_panel_frame())
            .show(ctx, |ui| {
                let params = self.engine.state().params().clone();
                eframe::egui::ScrollArea::vertical()
                    .show(ui, |ui| ControlsPanel::new(&params, &mut self.symbol_input).render(ui))
                    .inner
            })
            .inner;

        for command in commands {
            self.engine.dispatch(command);
        }
    }

    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let state = self.engine.state();
                    match state.renderable_frame() {
                        Some(frame) => {
                            if let Some(row) = frame.latest() {
                                render_latest_row(ui, &row);
                                ui.separator();
                            }
                            ui.label(
                                RichText::new(format_bar_count(frame.len()))
                                    .color(PLOT_CONFIG.color_text_subdued),
                            );
                        }
                        None => {
                            ui.label(
                                RichText::new(UI_TEXT.sb_degraded.as_str())
                                    .color(PLOT_CONFIG.color_banner),
                            );
                        }
                    }

                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            if state.is_loading() {
                                ui.label(
                                    RichText::new(UI_TEXT.sb_loading.as_str())
                                        .color(PLOT_CONFIG.color_info),
                                );
                                ui.add(Spinner::new());
                            } else {
                                ui.label(
                                    RichText::new(UI_TEXT.sb_ready.as_str())
                                        .color(PLOT_CONFIG.color_text_subdued),
                                );
                            }
                        },
                    );
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context, view: &ChartView) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.plot_view.show(ui, view);
            });
    }
}

/// "Latest 2024-03-01 14:30  C 1.0843  SMA 1.0821  U 1.0861  L 1.0781"
pub(crate) fn latest_row_summary(row: &FrameRow) -> String {
    let fmt_opt = |v: Option<f64>| v.map(format_price).unwrap_or_else(|| "-".to_string());
    let mut text = format!(
        "{} {}  C {}",
        UI_TEXT.sb_latest,
        TimeUtils::epoch_ms_to_utc(row.timestamp_ms),
        format_price(row.close)
    );
    if row.moving_average.is_some() {
        text.push_str(&format!(
            "  SMA {}  U {}  L {}",
            fmt_opt(row.moving_average),
            fmt_opt(row.upper_band),
            fmt_opt(row.lower_band)
        ));
    } else {
        text.push_str(&format!("  ({})", UI_TEXT.sb_warming_up));
    }
    text
}

fn render_latest_row(ui: &mut Ui, row: &FrameRow) {
    ui.label(RichText::new(latest_row_summary(row)).color(PLOT_CONFIG.color_text_primary));
}

impl eframe::App for StonksApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Pick up finished fetches before drawing anything
        self.engine.poll();

        self.render_side_panel(ctx);
        self.render_status_bar(ctx);

        let view = self.engine.view();
        self.render_central_panel(ctx, &view);

        if self.engine.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT_INTERVAL);
        }
    }
}
