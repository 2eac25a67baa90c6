use std::sync::LazyLock;

pub struct UiText {
    // --- Left panel ---
    pub lp_plot_type_heading: String,
    pub lp_period_heading: String,
    pub lp_interval_heading: String,
    pub lp_symbol_heading: String,
    pub lp_symbol_hint: String,
    pub lp_symbol_hover: String,

    // --- PLOT LABELS ---
    pub plot_x_axis: String,
    pub plot_y_axis: String,
    pub legend_close: String,
    pub legend_sma: String,
    pub legend_upper_band: String,
    pub legend_lower_band: String,

    // --- Status bar ---
    pub sb_loading: String,
    pub sb_ready: String,
    pub sb_degraded: String,
    pub sb_bars: String,
    pub sb_latest: String,
    pub sb_warming_up: String,

    // Built-in egui emoji font glyphs only
    pub icon_warning: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    lp_plot_type_heading: "Plot Type".to_string(),
    lp_period_heading: "Period".to_string(),
    lp_interval_heading: "Interval".to_string(),
    lp_symbol_heading: "Input".to_string(),
    lp_symbol_hint: "Ticker, e.g. AAPL or EURUSD=X".to_string(),
    lp_symbol_hover: "Press Enter to load the symbol".to_string(),

    plot_x_axis: "Date".to_string(),
    plot_y_axis: "Price".to_string(),
    legend_close: "Close".to_string(),
    legend_sma: "SMA".to_string(),
    legend_upper_band: "Upper Bollinger".to_string(),
    legend_lower_band: "Lower Bollinger".to_string(),

    sb_loading: "Loading…".to_string(),
    sb_ready: "Ready".to_string(),
    sb_degraded: "No data".to_string(),
    sb_bars: "bars".to_string(),
    sb_latest: "Latest".to_string(),
    sb_warming_up: "warming up".to_string(),

    icon_warning: "\u{26a0}".to_string(),
});
