mod core;
mod messages;
mod state;
mod worker;

pub use core::ChartEngine;

pub use messages::{ChartCommand, FetchJob, FetchOutcome};
pub use state::{
    ChartState, ChartView, Resolution, Transition, ViewMode, bootstrap,
    guidance_message,
};

pub use worker::{process_job, spawn_worker_thread};
