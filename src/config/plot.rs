//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS / OHLC BARS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to time step)
    pub candle_wick_width: f32, // Pixels
    /// Length of the open/close ticks on an OHLC bar, relative to time step
    pub ohlc_tick_pct: f64,
    pub ohlc_bar_width: f32,

    // --- CLOSE LINE ---
    pub close_line_color: Color32,
    pub close_line_width: f32,

    // --- BOLLINGER OVERLAYS ---
    pub sma_color: Color32,
    pub upper_band_color: Color32,
    pub lower_band_color: Color32,
    /// Overlays are deliberately thin so candles stay readable
    pub indicator_line_width: f32,
    pub band_dash_length: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding_pct: f64,
    /// Target count of labelled ticks on the time axis
    pub time_axis_target_marks: f64,

    // --- BANNER (degraded mode) ---
    pub color_banner: Color32,
    pub banner_font_size: f32,

    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
    pub color_info: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,
    ohlc_tick_pct: 0.35,
    ohlc_bar_width: 1.5,

    close_line_color: Color32::from_rgb(220, 220, 220),
    close_line_width: 1.5,

    sma_color: Color32::from_rgb(0, 160, 0),    // Green
    upper_band_color: Color32::from_rgb(220, 40, 40), // Red
    lower_band_color: Color32::from_rgb(60, 110, 255), // Blue
    indicator_line_width: 1.0,
    band_dash_length: 6.0,

    plot_y_padding_pct: 0.02,

    // X-Axis Padding (Horizontal)
    // 2% of the width is added to Left and Right.
    plot_x_padding_pct: 0.02,
    time_axis_target_marks: 8.0,

    color_banner: Color32::from_rgb(255, 80, 80),
    banner_font_size: 16.0,

    color_text_primary: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
    color_info: Color32::from_rgb(173, 216, 230), // Light Blue
};
