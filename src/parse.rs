use crate::errors::SweepError;
use crate::types::Measurement;
use crate::units::Unit;

/// The output grammar is a two-line micro-protocol the benchmark binaries
/// commit to: a mandatory `Elapsed: <D.DD><unit>` line (two fixed fraction
/// digits, unit one of ns/μs/ms/s) and, for self-verifying benchmarks, the
/// substring `passed` somewhere in the output. Everything that touches that
/// grammar lives in this module so a format change touches one place.
const ELAPSED_PREFIX: &str = "Elapsed: ";

/// Extract the timing value and the pass signal from one run's stdout.
pub fn parse_output(output: &str) -> Result<Measurement, SweepError> {
    let passed = has_pass_signal(output);

    for line in output.lines() {
        let Some(at) = line.find(ELAPSED_PREFIX) else {
            continue;
        };
        let rest = line[at + ELAPSED_PREFIX.len()..].trim_end();
        let (raw_time, unit) = split_time(rest)?;
        let value: f64 = raw_time.parse().map_err(|_| SweepError::NoElapsedLine)?;
        return Ok(Measurement {
            raw_time: raw_time.to_string(),
            value,
            unit,
            passed,
        });
    }

    Err(SweepError::NoElapsedLine)
}

/// Whether the output carries the verification pass signal. Checked
/// independently of the timing line.
pub fn has_pass_signal(output: &str) -> bool {
    output.contains("passed")
}

/// Split `12.34ms` into the value text and its unit. The value ends two
/// digits after the last decimal point; whatever follows is the unit suffix.
fn split_time(s: &str) -> Result<(&str, Unit), SweepError> {
    let dot = s.rfind('.').ok_or(SweepError::NoElapsedLine)?;
    let frac = s[dot + 1..].as_bytes();
    if frac.len() < 2 || !frac[..2].iter().all(|b| b.is_ascii_digit()) {
        return Err(SweepError::NoElapsedLine);
    }

    let (raw_time, suffix) = s.split_at(dot + 3);
    let unit: Unit = suffix.parse()?;
    Ok((raw_time, unit))
}
