//! Debugging feature flags.

pub struct LogFlags {
    /// Emit the trigger point and summary of every simulation run.
    pub log_simulation_events: bool,

    /// Time simulation runs with `trace_time!`.
    pub log_performance: bool,

    /// Per-sample cost above which a timed run is reported as slow.
    pub sample_budget_nanos: u128,

    /// Log how price documents were parsed and thinned.
    pub log_data_parsing: bool,
}

pub const DF: LogFlags = LogFlags {
    log_simulation_events: true,
    log_performance: false,
    sample_budget_nanos: 2_000,
    log_data_parsing: true,
};
