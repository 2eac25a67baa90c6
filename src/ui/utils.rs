use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

pub fn format_bar_count(count: usize) -> String {
    format!("{} {}", count, UI_TEXT.sb_bars)
}

/// Formats a price with precision scaled to its magnitude.
/// - Large (>=1000): 2 decimals
/// - Medium (1-1000): 4 decimals (forex majors need the pips)
/// - Small (<1): 6 decimals
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("{:.2}", price)
    } else if abs_price >= 1.0 {
        format!("{:.4}", price)
    } else {
        format!("{:.6}", price)
    }
}

pub fn section_heading(ui: &mut Ui, text: &str) {
    ui.label(
        RichText::new(text)
            .strong()
            .color(UI_CONFIG.colors.heading),
    );
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.chart_background;
    visuals.panel_fill = UI_CONFIG.colors.panel_background;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_scales_precision() {
        assert_eq!(format_price(95123.456), "95123.46");
        assert_eq!(format_price(1.08432), "1.0843");
        assert_eq!(format_price(0.00123456), "0.001235");
    }

    #[test]
    fn test_format_bar_count() {
        assert_eq!(format_bar_count(42), "42 bars");
    }
}
