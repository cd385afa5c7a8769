use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::types::{ConfigResult, SweepOutcome};

/// Everything the harness prints goes through here. In text mode the output
/// is the traditional interleaved trace (command line before each
/// configuration, sorted samples, `size: mean` line); in JSON mode the
/// trace is suppressed and a single document is emitted at the end.
pub struct Reporter {
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    benchmark: &'a str,
    started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    results: &'a [ConfigResult],
}

impl Reporter {
    pub fn new(json: bool) -> Self {
        Reporter { json }
    }

    /// Print the assembled command line before it runs, for traceability.
    pub fn command(&self, command: &str) {
        if self.json {
            return;
        }
        println!(
            "{}",
            command.if_supports_color(Stream::Stdout, |s| s.dimmed())
        );
    }

    pub fn warning(&self, message: &str) {
        if self.json {
            return;
        }
        println!(
            "{}",
            message.if_supports_color(Stream::Stdout, |s| s.yellow())
        );
    }

    pub fn result(&self, result: &ConfigResult) {
        if self.json {
            return;
        }
        println!("{}", format_samples(&result.samples_ms));
        println!(
            "{}",
            format_result_line(result).if_supports_color(Stream::Stdout, |s| s.bold())
        );
    }

    /// Emit the terminal output: the halt diagnostic in text mode, or the
    /// whole document in JSON mode.
    pub fn finish(&self, benchmark: &str, started_at: DateTime<Utc>, outcome: &SweepOutcome) {
        if !self.json {
            if let SweepOutcome::Halted(message) = outcome {
                println!("{message}");
            }
            return;
        }

        let report = match outcome {
            SweepOutcome::Completed(results) => JsonReport {
                benchmark,
                started_at,
                error: None,
                results,
            },
            SweepOutcome::Halted(message) => JsonReport {
                benchmark,
                started_at,
                error: Some(message),
                results: &[],
            },
        };

        // ConfigResult serializes to plain maps, so this cannot fail.
        let doc = serde_json::to_string_pretty(&report).unwrap_or_default();
        println!("{doc}");
    }
}

/// Sorted per-iteration durations, printed list-style: `[0.9, 1.0, 1.2]`.
pub fn format_samples(samples_ms: &[f64]) -> String {
    format!("{samples_ms:?}")
}

/// The reduced line for one configuration: `1024: 3.5`.
pub fn format_result_line(result: &ConfigResult) -> String {
    format!("{}: {}", result.size, result.mean_ms)
}
