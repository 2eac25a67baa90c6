use eframe::egui::{Key, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::config::{ChartInterval, ChartPeriod, PlotStyle};
use crate::domain::ChartParameters;
use crate::engine::ChartCommand;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;
use crate::ui::utils::section_heading;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Left side controls. Each widget maps onto exactly one [`ChartCommand`].
///
/// Selections are read from the current parameters every frame, so the radios
/// always reflect what the chart is actually showing (or loading).
pub struct ControlsPanel<'a> {
    params: &'a ChartParameters,
    symbol_input: &'a mut String,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(params: &'a ChartParameters, symbol_input: &'a mut String) -> Self {
        Self {
            params,
            symbol_input,
        }
    }
}

/// Radio group over every variant of `T`. Returns the clicked value, if any.
/// Clicking the already selected radio still reports it (and so refetches).
fn radio_group<T>(ui: &mut Ui, heading: &str, current: T) -> Option<T>
where
    T: IntoEnumIterator + PartialEq + Copy + std::fmt::Display,
{
    section_heading(ui, heading);
    let mut clicked = None;
    for variant in T::iter() {
        if ui.radio(variant == current, variant.to_string()).clicked() {
            clicked = Some(variant);
        }
    }
    ui.add_space(8.0);
    clicked
}

/// Command for a submitted symbol box. Blank input submits nothing.
pub(crate) fn symbol_command(input: &str) -> Option<ChartCommand> {
    let symbol = input.trim();
    (!symbol.is_empty()).then(|| ChartCommand::SetSymbol(symbol.to_string()))
}

impl Panel for ControlsPanel<'_> {
    type Event = ChartCommand;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if let Some(style) =
            radio_group::<PlotStyle>(ui, &UI_TEXT.lp_plot_type_heading, self.params.plot_style)
        {
            events.push(ChartCommand::SetPlotStyle(style));
        }
        if let Some(period) =
            radio_group::<ChartPeriod>(ui, &UI_TEXT.lp_period_heading, self.params.period)
        {
            events.push(ChartCommand::SetPeriod(period));
        }
        if let Some(interval) =
            radio_group::<ChartInterval>(ui, &UI_TEXT.lp_interval_heading, self.params.interval)
        {
            events.push(ChartCommand::SetInterval(interval));
        }

        section_heading(ui, &UI_TEXT.lp_symbol_heading);
        let response = ui
            .add(
                TextEdit::singleline(self.symbol_input)
                    .hint_text(UI_TEXT.lp_symbol_hint.as_str())
                    .desired_width(UI_CONFIG.symbol_input_width),
            )
            .on_hover_text(UI_TEXT.lp_symbol_hover.as_str());

        // Commit on Enter only; clicking away keeps the draft
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            if let Some(cmd) = symbol_command(self.symbol_input) {
                *self.symbol_input = self.symbol_input.trim().to_string();
                events.push(cmd);
            }
        }

        events
    }
}
