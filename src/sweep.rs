use anyhow::Result;

use crate::config::SweepConfig;
use crate::errors::SweepError;
use crate::parse;
use crate::reduce;
use crate::report::Reporter;
use crate::resolve;
use crate::runner;
use crate::types::{ConfigResult, SweepOutcome};

/// Assemble the full command line for one (size, variant) configuration:
/// fixed prefix, benchmark binary name, size flag, timing and verification
/// flags, then the variant's extra tokens.
pub fn assemble_command(prefix: &str, benchmark: &str, size: u64, variant: &str) -> String {
    let mut command = format!("{prefix} {benchmark} -- -s {size} -t -v");
    if !variant.is_empty() {
        command.push(' ');
        command.push_str(variant);
    }
    command
}

/// Drive one benchmark identifier through the whole sweep.
///
/// Every fatal condition except a spawn failure is folded into
/// `SweepOutcome::Halted` — the message is the report, and the process still
/// exits cleanly. A spawn failure propagates as a real error.
pub fn run_sweep(
    config: &SweepConfig,
    benchmark: &str,
    reporter: &Reporter,
) -> Result<SweepOutcome> {
    let plan = match resolve::resolve(config, benchmark) {
        Ok(plan) => plan,
        Err(err) if err.is_diagnostic() => return Ok(SweepOutcome::Halted(err.to_string())),
        Err(err) => return Err(err.into()),
    };

    if !plan.verifiable {
        reporter.warning("benchmark results might be incorrect");
    }

    let mut results = Vec::new();

    for &size in &plan.sizes {
        for variant in &plan.variants {
            let command = assemble_command(&config.command_prefix, benchmark, size, variant);
            reporter.command(&command);

            let mut samples =
                match collect_samples(&command, config.iterations, plan.verifiable) {
                    Ok(samples) => samples,
                    Err(err) if err.is_diagnostic() => {
                        // One bad sample invalidates the whole sweep; results
                        // already collected are discarded rather than reported
                        // from a corrupted run.
                        return Ok(SweepOutcome::Halted(err.to_string()));
                    }
                    Err(err) => return Err(err.into()),
                };

            samples.sort_by(|a, b| a.total_cmp(b));
            let mean_ms = reduce::trimmed_mean(&samples);

            let result = ConfigResult {
                size,
                variant: variant.clone(),
                samples_ms: samples,
                mean_ms,
            };
            reporter.result(&result);
            results.push(result);
        }
    }

    Ok(SweepOutcome::Completed(results))
}

/// Run one configuration `iterations` times and normalize each measurement
/// to milliseconds. The pass signal is checked before the timing line, so a
/// failing verifiable benchmark reports `benchmark failed` even when its
/// timing output is also broken.
fn collect_samples(
    command: &str,
    iterations: usize,
    verifiable: bool,
) -> Result<Vec<f64>, SweepError> {
    let mut samples = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let output = runner::run_command(command)?;

        if verifiable && !parse::has_pass_signal(&output) {
            return Err(SweepError::VerificationFailed);
        }

        let measurement = parse::parse_output(&output)?;
        samples.push(measurement.millis());
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// A config whose "benchmark" is a printf stub; the trailing `#` makes
    /// the shell ignore the appended binary name and flags.
    fn stub_config(stub: &str) -> SweepConfig {
        SweepConfig {
            sizes: vec![1, 2],
            iterations: 3,
            command_prefix: stub.to_string(),
            variants: BTreeMap::new(),
            verifiable: vec![],
        }
    }

    fn quiet() -> Reporter {
        Reporter::new(true)
    }

    #[test]
    fn command_assembly_without_variant() {
        assert_eq!(
            assemble_command(
                "cargo run --release --features 1d --features float --bin",
                "relu",
                1024,
                ""
            ),
            "cargo run --release --features 1d --features float --bin relu -- -s 1024 -t -v"
        );
    }

    #[test]
    fn command_assembly_with_variant() {
        assert_eq!(
            assemble_command("cargo run --bin", "convolution", 2048, "-k 3"),
            "cargo run --bin convolution -- -s 2048 -t -v -k 3"
        );
    }

    #[test]
    fn successful_sweep_covers_sizes_times_variants() {
        let mut config = stub_config("printf 'Elapsed: 2.00ms\\n' #");
        config
            .variants
            .insert("stub".to_string(), vec!["-k 1".to_string(), "-k 2".to_string()]);

        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Completed(results) = outcome else {
            panic!("expected completed sweep");
        };

        // 2 sizes x 2 variants
        assert_eq!(results.len(), 4);
        for result in &results {
            assert_eq!(result.samples_ms.len(), 3);
            assert_eq!(result.mean_ms, 2.0);
        }
        assert_eq!(results[0].size, 1);
        assert_eq!(results[0].variant, "-k 1");
        assert_eq!(results[1].variant, "-k 2");
        assert_eq!(results[2].size, 2);
    }

    #[test]
    fn unsupported_benchmark_halts_before_running() {
        let config = stub_config("printf 'Elapsed: 2.00ms\\n' #");
        let outcome = run_sweep(&config, "matrix_multiplication", &quiet()).unwrap();
        let SweepOutcome::Halted(message) = outcome else {
            panic!("expected halt");
        };
        assert_eq!(message, "matrix_multiplication is not supported");
    }

    #[test]
    fn verification_failure_halts_with_no_results() {
        let mut config = stub_config("printf 'Elapsed: 2.00ms\\n' #");
        config.verifiable = vec!["stub".to_string()];

        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Halted(message) = outcome else {
            panic!("expected halt");
        };
        assert_eq!(message, "benchmark failed");
    }

    #[test]
    fn verifiable_benchmark_with_pass_signal_completes() {
        let mut config = stub_config("printf 'Verification passed\\nElapsed: 4.00ms\\n' #");
        config.verifiable = vec!["stub".to_string()];

        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        assert!(matches!(outcome, SweepOutcome::Completed(ref r) if r.len() == 2));
    }

    #[test]
    fn missing_timing_line_halts() {
        let config = stub_config("printf 'no timing here\\n' #");
        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Halted(message) = outcome else {
            panic!("expected halt");
        };
        assert_eq!(message, "could not find elapsed time");
    }

    #[test]
    fn unsupported_unit_halts() {
        let config = stub_config("printf 'Elapsed: 2.00ks\\n' #");
        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Halted(message) = outcome else {
            panic!("expected halt");
        };
        assert_eq!(message, "unit not supported");
    }

    #[test]
    fn verification_checked_before_timing_parse() {
        // Output with neither signal: the verifiable case must report the
        // verification failure, not the parse failure.
        let mut config = stub_config("printf 'nothing useful\\n' #");
        config.verifiable = vec!["stub".to_string()];

        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Halted(message) = outcome else {
            panic!("expected halt");
        };
        assert_eq!(message, "benchmark failed");
    }

    #[test]
    fn samples_normalized_to_millis() {
        let config = stub_config("printf 'Elapsed: 2.50s\\n' #");
        let outcome = run_sweep(&config, "stub", &quiet()).unwrap();
        let SweepOutcome::Completed(results) = outcome else {
            panic!("expected completed sweep");
        };
        assert_eq!(results[0].mean_ms, 2500.0);
        assert_eq!(results[0].samples_ms, vec![2500.0, 2500.0, 2500.0]);
    }
}
