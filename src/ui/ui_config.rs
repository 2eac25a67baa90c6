use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

#[derive(Clone, Copy)]
pub struct UiColors {
    /// Applied to every label through the global visuals
    pub label: Color32,
    /// Radio group and input headings
    pub heading: Color32,
    pub chart_background: Color32,
    pub panel_background: Color32,
}

#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_width: f32,
    pub symbol_input_width: f32,
    pub panel_margin: i8,
    pub status_bar_vertical_margin: i8,
    /// Right gap so the y-axis label does not touch the window edge
    pub chart_right_margin: i8,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        chart_background: Color32::from_rgb(20, 20, 24),
        panel_background: Color32::from_rgb(25, 25, 25),
    },
    side_panel_width: 170.0,
    symbol_input_width: 140.0,
    panel_margin: 8,
    status_bar_vertical_margin: 4,
    chart_right_margin: 8,
};

impl UiConfig {
    fn filled(fill: Color32, inner_margin: Margin) -> Frame {
        Frame::NONE
            .fill(fill)
            .stroke(Stroke::NONE)
            .inner_margin(inner_margin)
    }

    pub fn side_panel_frame(&self) -> Frame {
        Self::filled(self.colors.panel_background, Margin::same(self.panel_margin))
    }

    pub fn bottom_panel_frame(&self) -> Frame {
        Self::filled(
            self.colors.panel_background,
            Margin::symmetric(self.panel_margin, self.status_bar_vertical_margin),
        )
    }

    pub fn central_panel_frame(&self) -> Frame {
        Self::filled(
            self.colors.chart_background,
            Margin {
                right: self.chart_right_margin,
                ..Margin::ZERO
            },
        )
    }
}
