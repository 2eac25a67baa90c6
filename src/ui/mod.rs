mod plot_layers;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
mod utils;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::{ControlsPanel, Panel};
pub(crate) use ui_plot_view::PlotView;
pub(crate) use utils::{format_bar_count, format_price, setup_custom_visuals};
