use std::process::{Command, Stdio};

use crate::errors::SweepError;

/// Run one benchmark invocation and capture its stdout.
///
/// The command line is a single opaque string executed through `sh -c`; the
/// driver is responsible for assembling and quoting it. Stderr is discarded,
/// and the call blocks until the child exits — there is no timeout, so an
/// unresponsive benchmark hangs the harness (documented limitation).
///
/// The child's exit status is not inspected: a benchmark that dies without
/// printing a timing line surfaces as a parse failure downstream.
pub fn run_command(command_line: &str) -> Result<String, SweepError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(command_line)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| SweepError::Spawn { source })?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout() {
        let out = run_command("printf 'Elapsed: 1.00ms\\n'").unwrap();
        assert_eq!(out, "Elapsed: 1.00ms\n");
    }

    #[test]
    fn stderr_is_discarded() {
        let out = run_command("echo visible; echo hidden >&2").unwrap();
        assert_eq!(out, "visible\n");
    }

    #[test]
    fn nonzero_exit_still_returns_stdout() {
        // A crashing benchmark is not a spawn failure; the missing timing
        // line is caught by the parser instead.
        let out = run_command("echo partial; exit 3").unwrap();
        assert_eq!(out, "partial\n");
    }

    #[test]
    fn missing_executable_produces_empty_stdout() {
        let out = run_command("/nonexistent/benchmark-binary 2>/dev/null").unwrap();
        assert!(out.is_empty());
    }
}
