use serde::Serialize;

use crate::units::Unit;

/// What the resolver produced for one benchmark identifier.
#[derive(Debug, Clone)]
pub struct SweepPlan {
    /// Workload sizes, swept in declared order.
    pub sizes: Vec<u64>,
    /// Extra argument variants layered on the base invocation. An empty
    /// string means "no extra flags" and is a valid variant.
    pub variants: Vec<String>,
    /// Whether the benchmark is expected to print a pass signal.
    pub verifiable: bool,
}

/// One parsed benchmark invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The elapsed value exactly as printed, e.g. "12.34".
    pub raw_time: String,
    pub value: f64,
    pub unit: Unit,
    /// Whether the output carried the "passed" verification signal.
    pub passed: bool,
}

impl Measurement {
    pub fn millis(&self) -> f64 {
        self.unit.to_millis(self.value)
    }
}

/// Reduced result for one (size, variant) configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResult {
    pub size: u64,
    pub variant: String,
    /// Per-iteration normalized durations, sorted ascending.
    pub samples_ms: Vec<f64>,
    /// Trimmed mean of `samples_ms`.
    pub mean_ms: f64,
}

/// Terminal state of one sweep. Both are final; there is no retry or resume.
#[derive(Debug)]
pub enum SweepOutcome {
    Completed(Vec<ConfigResult>),
    /// The sweep stopped early; the message is the only thing reported.
    /// Results collected before the halt are discarded.
    Halted(String),
}
