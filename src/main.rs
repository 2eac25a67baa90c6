#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use std::{panic, sync::Arc};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::NativeOptions;

use stonks::{ChartEngine, ChartParameters, Cli, MarketDataProvider, YahooProvider, bootstrap, run_app};

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("stonks"), my_code_level)
        .parse_default_env() // RUST_LOG still wins
        .init();
}

fn main() -> Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    let args = Cli::parse();
    let params = ChartParameters::for_symbol(args.symbol.trim());
    let symbol = params.symbol.clone();

    let provider: Arc<dyn MarketDataProvider> = Arc::new(YahooProvider::new()?);

    // First frame is fetched before any window exists: no data, no window.
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let state = rt
        .block_on(bootstrap(provider.as_ref(), params))
        .with_context(|| format!("failed to load initial chart for {}", symbol))
        .inspect_err(|e| log::error!("{:#}", e))?;
    drop(rt);

    let engine = ChartEngine::new(state, provider)?;

    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title(format!("stonks - {}", symbol)),
        ..Default::default()
    };

    eframe::run_native(
        "stonks",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, engine)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
