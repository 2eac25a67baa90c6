#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::StonksApp;
pub use data::{MarketDataProvider, NoDataError, StaticProvider, YahooProvider};
pub use domain::ChartParameters;
pub use engine::{ChartCommand, ChartEngine, ChartState, ChartView, ViewMode, bootstrap};
pub use models::{IndicatorFrame, PriceSeries};

// CLI argument parsing
use clap::Parser;

use crate::config::DEFAULT_SYMBOL;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Interactive Bollinger band price chart", long_about = None)]
pub struct Cli {
    /// Ticker symbol to open with (forex pairs need the `=X` suffix, e.g. EURUSD=X)
    #[arg(default_value = DEFAULT_SYMBOL)]
    pub symbol: String,
}

/// Creates the GUI app around an engine that already holds the first frame.
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, engine: ChartEngine) -> StonksApp {
    StonksApp::new(cc, engine)
}
