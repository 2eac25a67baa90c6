use std::sync::Arc;

use crate::analysis::compute_default_bollinger;
use crate::config::{ChartInterval, PlotStyle};
use crate::config::constants::FOREX_SUFFIX_HINT;
use crate::data::{FetchRequest, MarketDataProvider, NoDataError};
use crate::domain::ChartParameters;
use crate::models::{IndicatorFrame, PriceSeries};

use super::messages::{ChartCommand, FetchJob, FetchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// The held frame is drawn
    Normal,
    /// A banner replaces the chart area
    Degraded,
}

/// What `ChartState::apply` asks the caller to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed (e.g. a blank symbol was submitted)
    Unchanged,
    /// Repaint right away; no data is needed
    Redraw(ViewMode),
    /// Run this job and hand its outcome to `ChartState::resolve`
    Fetch(FetchJob),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied(ViewMode),
    /// A newer request was issued after this one; the outcome was dropped
    Stale,
}

/// The frame last fetched successfully, plus the current error (if any).
///
/// The frame is kept through degraded spells so a later style change or
/// recovery has something to work with, but it is only drawn while
/// `error_message` is `None`. `shown_request` is the request behind whatever
/// is on screen, so titles and axes keep describing it while a newer fetch
/// is still pending.
#[derive(Debug, Clone)]
struct DisplayState {
    current_frame: Arc<IndicatorFrame>,
    error_message: Option<String>,
    shown_request: FetchRequest,
}

/// Snapshot handed to the renderer. Exactly one of frame / banner exists.
#[derive(Debug, Clone)]
pub enum ChartView {
    Normal {
        title: String,
        frame: Arc<IndicatorFrame>,
        style: PlotStyle,
        /// Interval the frame was fetched with
        interval: ChartInterval,
    },
    Degraded {
        title: String,
        banner: String,
    },
}

impl ChartView {
    pub fn title(&self) -> &str {
        match self {
            Self::Normal { title, .. } | Self::Degraded { title, .. } => title,
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Normal { .. } => ViewMode::Normal,
            Self::Degraded { .. } => ViewMode::Degraded,
        }
    }
}

/// Banner text for a failed fetch: the error itself plus the `=X` hint for forex pairs.
pub fn guidance_message(err: &NoDataError) -> String {
    format!("{}, \n{}", err, FOREX_SUFFIX_HINT)
}

/// Owner of the chart parameters and of what is on screen.
///
/// Every change goes through [`ChartState::apply`]. Changes that need new data
/// bump a generation counter and return a [`FetchJob`]; only the outcome of the
/// newest job is ever accepted by [`ChartState::resolve`].
#[derive(Debug, Clone)]
pub struct ChartState {
    params: ChartParameters,
    display: DisplayState,
    generation: u64,
    resolved_generation: u64,
}

impl ChartState {
    /// Starts in Normal. A failed initial fetch fails construction instead of
    /// producing a degraded first paint.
    pub fn new(
        params: ChartParameters,
        initial: Result<PriceSeries, NoDataError>,
    ) -> Result<Self, NoDataError> {
        let series = Arc::new(initial?);
        let frame = Arc::new(compute_default_bollinger(&series));
        Ok(Self::from_frame(params, frame))
    }

    pub fn from_frame(params: ChartParameters, frame: Arc<IndicatorFrame>) -> Self {
        let shown_request = FetchRequest::from(&params);
        Self {
            params,
            display: DisplayState {
                current_frame: frame,
                error_message: None,
                shown_request,
            },
            generation: 0,
            resolved_generation: 0,
        }
    }

    pub fn apply(&mut self, command: ChartCommand) -> Transition {
        let needs_fetch = command.needs_fetch();
        match command {
            ChartCommand::SetSymbol(raw) => {
                let symbol = raw.trim();
                if symbol.is_empty() {
                    return Transition::Unchanged;
                }
                self.params.symbol = symbol.to_string();
            }
            ChartCommand::SetPeriod(period) => self.params.period = period,
            ChartCommand::SetInterval(interval) => self.params.interval = interval,
            ChartCommand::SetPlotStyle(style) => self.params.plot_style = style,
        }
        if !needs_fetch {
            return Transition::Redraw(self.mode());
        }

        self.generation += 1;
        Transition::Fetch(FetchJob {
            generation: self.generation,
            request: FetchRequest::from(&self.params),
        })
    }

    pub fn resolve(&mut self, outcome: FetchOutcome) -> Resolution {
        if outcome.generation != self.generation {
            return Resolution::Stale;
        }
        self.resolved_generation = outcome.generation;
        self.display.shown_request = outcome.request;

        match outcome.result {
            Ok(frame) => {
                self.display.current_frame = frame;
                self.display.error_message = None;
                Resolution::Applied(ViewMode::Normal)
            }
            Err(err) => {
                log::warn!("No data for {}: {}", self.display.shown_request, err);
                self.display.error_message = Some(guidance_message(&err));
                Resolution::Applied(ViewMode::Degraded)
            }
        }
    }

    pub fn set_symbol(&mut self, symbol: impl Into<String>) -> Transition {
        self.apply(ChartCommand::SetSymbol(symbol.into()))
    }

    pub fn set_period(&mut self, period: crate::config::ChartPeriod) -> Transition {
        self.apply(ChartCommand::SetPeriod(period))
    }

    pub fn set_interval(&mut self, interval: crate::config::ChartInterval) -> Transition {
        self.apply(ChartCommand::SetInterval(interval))
    }

    pub fn set_plot_style(&mut self, style: PlotStyle) -> Transition {
        self.apply(ChartCommand::SetPlotStyle(style))
    }

    pub fn params(&self) -> &ChartParameters {
        &self.params
    }

    pub fn mode(&self) -> ViewMode {
        if self.display.error_message.is_some() {
            ViewMode::Degraded
        } else {
            ViewMode::Normal
        }
    }

    /// Last good frame, whether or not it is currently drawn.
    pub fn current_frame(&self) -> &Arc<IndicatorFrame> {
        &self.display.current_frame
    }

    /// The frame to draw, present only in Normal mode.
    pub fn renderable_frame(&self) -> Option<&Arc<IndicatorFrame>> {
        match self.mode() {
            ViewMode::Normal => Some(&self.display.current_frame),
            ViewMode::Degraded => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.display.error_message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while the newest issued job has not been resolved.
    pub fn is_loading(&self) -> bool {
        self.resolved_generation < self.generation
    }

    /// Request behind the frame or banner currently on screen. Lags
    /// `params()` while a fetch is pending.
    pub fn shown_request(&self) -> &FetchRequest {
        &self.display.shown_request
    }

    /// Title and axes follow `shown_request`; only the plot style is live.
    pub fn view(&self) -> ChartView {
        let shown = &self.display.shown_request;
        let title = shown.title();
        match &self.display.error_message {
            Some(banner) => ChartView::Degraded {
                title,
                banner: banner.clone(),
            },
            None => ChartView::Normal {
                title,
                frame: Arc::clone(&self.display.current_frame),
                style: self.params.plot_style,
                interval: shown.interval,
            },
        }
    }
}

/// Initial fetch + compute. Errors propagate: there is no degraded start.
pub async fn bootstrap(
    provider: &dyn MarketDataProvider,
    params: ChartParameters,
) -> Result<ChartState, NoDataError> {
    let request = FetchRequest::from(&params);
    log::info!("Bootstrapping chart with {}", request);
    let initial = provider.fetch(&request).await;
    ChartState::new(params, initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartInterval, ChartPeriod};
    use crate::data::StaticProvider;
    use crate::engine::worker::process_job;

    fn closes(n: usize, base: f64) -> Vec<f64> {
        (0..n).map(|i| base + (i % 7) as f64).collect()
    }

    fn provider() -> StaticProvider {
        StaticProvider::new()
            .with_series(PriceSeries::from_closes("AAPL", &closes(40, 180.0), 0, 900_000))
            .with_series(PriceSeries::from_closes("MSFT", &closes(30, 400.0), 0, 900_000))
    }

    async fn started(provider: &StaticProvider) -> ChartState {
        bootstrap(provider, ChartParameters::for_symbol("AAPL")).await.unwrap()
    }

    async fn run(state: &mut ChartState, provider: &StaticProvider, cmd: ChartCommand) -> Resolution {
        match state.apply(cmd) {
            Transition::Fetch(job) => state.resolve(process_job(provider, job).await),
            other => panic!("expected a fetch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_invalid_asset_fails() {
        let provider = StaticProvider::new();
        let err = bootstrap(&provider, ChartParameters::for_symbol("INVALID_ASSET"))
            .await
            .unwrap_err();
        assert_eq!(err.symbol, "INVALID_ASSET");
        assert!(err.is_empty_result());
    }

    #[tokio::test]
    async fn test_bootstrap_starts_normal() {
        let provider = provider();
        let state = started(&provider).await;
        assert_eq!(state.mode(), ViewMode::Normal);
        assert_eq!(state.current_frame().symbol(), "AAPL");
        assert!(!state.is_loading());
        assert!(state.error_message().is_none());
    }

    #[tokio::test]
    async fn test_failed_symbol_degrades_then_recovers() {
        let provider = provider();
        let mut state = started(&provider).await;
        let before = Arc::clone(state.current_frame());

        let res = run(&mut state, &provider, ChartCommand::SetSymbol("INVALID".into())).await;
        assert_eq!(res, Resolution::Applied(ViewMode::Degraded));
        let message = state.error_message().unwrap_or_default();
        assert!(message.contains("INVALID"));
        assert!(message.contains("=X"));
        // Previous frame retained, but not drawable
        assert!(Arc::ptr_eq(state.current_frame(), &before));
        assert!(state.renderable_frame().is_none());
        assert_eq!(state.view().title(), "INVALID Price Chart");

        let res = run(&mut state, &provider, ChartCommand::SetSymbol("AAPL".into())).await;
        assert_eq!(res, Resolution::Applied(ViewMode::Normal));
        assert!(state.error_message().is_none());
        assert!(state.renderable_frame().is_some());
    }

    #[tokio::test]
    async fn test_plot_style_only_redraws() {
        let provider = provider();
        let mut state = started(&provider).await;
        let frame_before = Arc::clone(state.current_frame());
        let generation = state.generation();

        let t = state.set_plot_style(PlotStyle::Ohlc);
        assert_eq!(t, Transition::Redraw(ViewMode::Normal));
        assert_eq!(state.params().plot_style, PlotStyle::Ohlc);
        assert_eq!(state.generation(), generation);
        assert!(Arc::ptr_eq(state.current_frame(), &frame_before));
        assert_eq!(**state.current_frame(), *frame_before);
        // Only the bootstrap fetch happened
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_plot_style_while_degraded_stays_degraded() {
        let provider = provider();
        let mut state = started(&provider).await;
        run(&mut state, &provider, ChartCommand::SetSymbol("NOPE".into())).await;

        assert_eq!(state.set_plot_style(PlotStyle::Line), Transition::Redraw(ViewMode::Degraded));
        assert!(matches!(state.view(), ChartView::Degraded { .. }));
    }

    #[tokio::test]
    async fn test_stale_outcome_is_discarded() {
        let provider = provider();
        let mut state = started(&provider).await;

        let Transition::Fetch(first) = state.set_symbol("INVALID") else {
            panic!("expected fetch");
        };
        let Transition::Fetch(second) = state.set_symbol("MSFT") else {
            panic!("expected fetch");
        };
        assert!(second.generation > first.generation);

        let first_outcome = process_job(&provider, first).await;
        let second_outcome = process_job(&provider, second).await;

        // Newer result lands first, then the older one arrives late
        assert_eq!(state.resolve(second_outcome), Resolution::Applied(ViewMode::Normal));
        assert_eq!(state.resolve(first_outcome), Resolution::Stale);
        assert_eq!(state.mode(), ViewMode::Normal);
        assert_eq!(state.current_frame().symbol(), "MSFT");
    }

    #[tokio::test]
    async fn test_older_outcome_before_newer_is_also_stale() {
        let provider = provider();
        let mut state = started(&provider).await;

        let Transition::Fetch(first) = state.set_period(ChartPeriod::Y1) else {
            panic!("expected fetch");
        };
        let Transition::Fetch(second) = state.set_interval(ChartInterval::D1) else {
            panic!("expected fetch");
        };
        assert_eq!(state.resolve(process_job(&provider, first).await), Resolution::Stale);
        assert!(state.is_loading());
        assert_eq!(
            state.resolve(process_job(&provider, second).await),
            Resolution::Applied(ViewMode::Normal)
        );
        assert!(!state.is_loading());
        assert_eq!(provider.last_request().map(|r| r.interval), Some(ChartInterval::D1));
        assert_eq!(provider.last_request().map(|r| r.period), Some(ChartPeriod::Y1));
    }

    #[tokio::test]
    async fn test_blank_symbol_is_ignored_and_input_is_trimmed() {
        let provider = provider();
        let mut state = started(&provider).await;

        assert_eq!(state.set_symbol("   "), Transition::Unchanged);
        assert_eq!(state.params().symbol, "AAPL");

        let Transition::Fetch(job) = state.set_symbol("  MSFT \n") else {
            panic!("expected fetch");
        };
        assert_eq!(job.request.symbol, "MSFT");
        assert_eq!(state.params().symbol, "MSFT");
    }

    #[tokio::test]
    async fn test_exactly_one_of_frame_or_banner_drives_view() {
        let provider = provider();
        let mut state = started(&provider).await;
        let commands = vec![
            ChartCommand::SetSymbol("BAD".into()),
            ChartCommand::SetPlotStyle(PlotStyle::Line),
            ChartCommand::SetSymbol("MSFT".into()),
            ChartCommand::SetPeriod(ChartPeriod::Mo6),
            ChartCommand::SetSymbol("WORSE".into()),
        ];
        for cmd in commands {
            if let Transition::Fetch(job) = state.apply(cmd) {
                state.resolve(process_job(&provider, job).await);
            }
            match state.view() {
                ChartView::Normal { .. } => {
                    assert!(state.error_message().is_none());
                    assert!(state.renderable_frame().is_some());
                }
                ChartView::Degraded { banner, .. } => {
                    assert!(!banner.is_empty());
                    assert!(state.renderable_frame().is_none());
                }
            }
        }
    }

    #[tokio::test]
    async fn test_pending_fetch_keeps_view_on_shown_request() {
        let provider = provider();
        let mut state = started(&provider).await;

        let Transition::Fetch(job) = state.set_symbol("MSFT") else {
            panic!("expected fetch");
        };
        state.set_interval(ChartInterval::D1);
        assert!(state.is_loading());
        assert_eq!(state.params().symbol, "MSFT");

        // Still showing AAPL at 15m until a result lands
        let ChartView::Normal { title, frame, interval, .. } = state.view() else {
            panic!("expected normal view");
        };
        assert_eq!(title, "AAPL Price Chart");
        assert_eq!(frame.symbol(), "AAPL");
        assert_eq!(interval, ChartInterval::M15);
        assert_eq!(state.shown_request().symbol, "AAPL");

        // The superseded job changes nothing
        assert_eq!(state.resolve(process_job(&provider, job).await), Resolution::Stale);
        assert_eq!(state.view().title(), "AAPL Price Chart");

        let Transition::Fetch(latest) = state.set_interval(ChartInterval::D1) else {
            panic!("expected fetch");
        };
        state.resolve(process_job(&provider, latest).await);
        let ChartView::Normal { title, frame, interval, .. } = state.view() else {
            panic!("expected normal view");
        };
        assert_eq!(title, "MSFT Price Chart");
        assert_eq!(frame.symbol(), "MSFT");
        assert_eq!(interval, ChartInterval::D1);
    }

    #[tokio::test]
    async fn test_plot_style_applies_while_loading() {
        let provider = provider();
        let mut state = started(&provider).await;
        let _pending = state.set_symbol("MSFT");

        state.set_plot_style(PlotStyle::Line);
        let ChartView::Normal { title, style, .. } = state.view() else {
            panic!("expected normal view");
        };
        assert_eq!(style, PlotStyle::Line);
        assert_eq!(title, "AAPL Price Chart");
    }

    #[test]
    fn test_guidance_message_format() {
        let request = FetchRequest {
            symbol: "EURUSD".into(),
            period: ChartPeriod::Mo1,
            interval: ChartInterval::M15,
        };
        let msg = guidance_message(&NoDataError::empty(&request));
        assert!(msg.starts_with("No data fetched for ticker symbol 'EURUSD'"));
        assert!(msg.ends_with("moreover check if INPUT='EURUSD=X' whilst entering forex pairs, 'EURUSD' is wrong"));
    }
}
