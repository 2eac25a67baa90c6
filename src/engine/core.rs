use std::sync::Arc;
use std::sync::mpsc::{Receiver, SendError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::Result;

use crate::data::{MarketDataProvider, NoDataError};
use crate::utils::AppInstant;

#[cfg(debug_assertions)]
use crate::config::DF;

use super::messages::{ChartCommand, FetchJob, FetchOutcome};
use super::state::{ChartState, ChartView, Resolution, Transition, ViewMode};
use super::worker;

/// Glue between the UI thread and the fetch worker.
///
/// The UI only ever talks to this: `dispatch` for input, `poll` once per frame,
/// `view` for drawing.
pub struct ChartEngine {
    state: ChartState,

    job_tx: Sender<FetchJob>,          // UI writes to this
    result_rx: Receiver<FetchOutcome>, // UI reads from this

    _worker: JoinHandle<()>,
}

impl ChartEngine {
    /// Wraps an already bootstrapped state and spawns the worker.
    pub fn new(state: ChartState, provider: Arc<dyn MarketDataProvider>) -> Result<Self> {
        let (job_tx, job_rx) = channel::<FetchJob>();
        let (result_tx, result_rx) = channel::<FetchOutcome>();
        let worker = worker::spawn_worker_thread(provider, job_rx, result_tx)?;

        Ok(Self {
            state,
            job_tx,
            result_rx,
            _worker: worker,
        })
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn view(&self) -> ChartView {
        self.state.view()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Applies a command. Returns the mode to repaint in when it takes effect
    /// immediately; fetch-backed commands report through `poll` later.
    pub fn dispatch(&mut self, command: ChartCommand) -> Option<ViewMode> {
        #[cfg(debug_assertions)]
        if DF.log_ui_commands {
            log::info!("Command: {:?}", command);
        }

        match self.state.apply(command) {
            Transition::Unchanged => None,
            Transition::Redraw(mode) => Some(mode),
            Transition::Fetch(job) => match self.job_tx.send(job) {
                Ok(()) => None,
                Err(SendError(job)) => {
                    log::error!("Fetch worker is gone; cannot run job #{}", job.generation);
                    let err = NoDataError::fetch_failed(&job.request, "fetch worker is not running");
                    let outcome = FetchOutcome {
                        generation: job.generation,
                        request: job.request,
                        result: Err(err),
                    };
                    self.apply_outcome(outcome)
                }
            },
        }
    }

    /// Drains finished jobs. Returns the resulting mode if anything on screen changed.
    pub fn poll(&mut self) -> Option<ViewMode> {
        let mut changed = None;
        while let Ok(outcome) = self.result_rx.try_recv() {
            if let Some(mode) = self.apply_outcome(outcome) {
                changed = Some(mode);
            }
        }
        changed
    }

    /// Blocks until the newest job resolves or `timeout` elapses.
    pub fn wait_idle(&mut self, timeout: Duration) -> Option<ViewMode> {
        let deadline = AppInstant::now() + timeout;
        let mut changed = None;
        while self.state.is_loading() {
            let remaining = deadline.saturating_duration_since(AppInstant::now());
            if remaining.is_zero() {
                break;
            }
            match self.result_rx.recv_timeout(remaining) {
                Ok(outcome) => {
                    if let Some(mode) = self.apply_outcome(outcome) {
                        changed = Some(mode);
                    }
                }
                Err(_) => break,
            }
        }
        changed
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) -> Option<ViewMode> {
        #[cfg(debug_assertions)]
        let generation = outcome.generation;
        match self.state.resolve(outcome) {
            Resolution::Applied(mode) => Some(mode),
            Resolution::Stale => {
                #[cfg(debug_assertions)]
                if DF.log_stale_results {
                    log::info!(
                        "Discarded stale outcome #{} (current #{})",
                        generation,
                        self.state.generation()
                    );
                }
                None
            }
        }
    }
}
