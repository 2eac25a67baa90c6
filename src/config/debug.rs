//! Debugging feature flags.

pub struct LogFlags {
    /// Activate trace_time macro (for scope-level timing of fetch jobs)
    pub log_performance: bool,

    /// Log every command coming out of the control panel
    pub log_ui_commands: bool,

    /// Log fetch outcomes that arrive after a newer request superseded them
    pub log_stale_results: bool,

    /// Dump a short summary of each freshly computed frame
    pub log_frame_summary: bool,
}

pub const DF: LogFlags = LogFlags {
    log_performance: true,
    log_ui_commands: true,
    log_stale_results: true,
    log_frame_summary: true,
};

/// Global switch read by `trace_time!`.
pub const LOG_PERFORMANCE: bool = DF.log_performance;
