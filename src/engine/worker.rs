use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tokio::runtime::Builder;

use super::messages::{FetchJob, FetchOutcome};

use crate::analysis::compute_default_bollinger;
use crate::config::constants::SLOW_FETCH_THRESHOLD_MICROS;
use crate::data::MarketDataProvider;
use crate::utils::{AppInstant, format_duration};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Spawns the background thread that serves fetch jobs one at a time.
///
/// The thread owns its own tokio runtime and exits once either channel end
/// is dropped.
pub fn spawn_worker_thread(
    provider: Arc<dyn MarketDataProvider>,
    rx: Receiver<FetchJob>,
    tx: Sender<FetchOutcome>,
) -> Result<JoinHandle<()>> {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create fetch runtime")?;

    thread::Builder::new()
        .name("stonks-fetch".into())
        .spawn(move || {
            log::info!("Fetch worker started");
            while let Ok(mut job) = rx.recv() {
                // Anything queued behind this job supersedes it; skip straight to the newest.
                while let Ok(newer) = rx.try_recv() {
                    #[cfg(debug_assertions)]
                    if DF.log_stale_results {
                        log::info!("Skipping superseded job #{} ({})", job.generation, job.request);
                    }
                    job = newer;
                }

                let outcome = rt.block_on(process_job(provider.as_ref(), job));
                if tx.send(outcome).is_err() {
                    break;
                }
            }
            log::info!("Fetch worker stopped");
        })
        .context("failed to spawn fetch worker")
}

/// Fetch + indicator pass for one job. Never fails: errors travel inside the outcome.
pub async fn process_job(provider: &dyn MarketDataProvider, job: FetchJob) -> FetchOutcome {
    let start = AppInstant::now();
    let label = format!("Fetch job #{} [{}]", job.generation, job.request);

    let result = crate::trace_time!(&label, SLOW_FETCH_THRESHOLD_MICROS, {
        match provider.fetch(&job.request).await {
            Ok(series) => {
                let series = Arc::new(series);
                Ok(Arc::new(compute_default_bollinger(&series)))
            }
            Err(e) => Err(e),
        }
    });

    let duration_ms = start.elapsed().as_millis();
    match &result {
        Ok(frame) => {
            log::info!("{}: {} bars in {}", label, frame.len(), format_duration(duration_ms as i64));
            #[cfg(debug_assertions)]
            if DF.log_frame_summary {
                if let Some(row) = frame.latest() {
                    log::info!(
                        "   -> last close {:.4}, SMA {:?}, bands {:?} / {:?}",
                        row.close,
                        row.moving_average,
                        row.lower_band,
                        row.upper_band
                    );
                }
            }
        }
        Err(e) => log::warn!("{}: failed after {}: {}", label, format_duration(duration_ms as i64), e),
    }

    FetchOutcome {
        generation: job.generation,
        request: job.request,
        result,
    }
}
