use crate::config::SweepConfig;
use crate::errors::SweepError;
use crate::types::SweepPlan;

/// The one benchmark the harness refuses to drive: its binary needs the 2d
/// feature set the fixed command prefix does not select.
const UNSUPPORTED_BENCHMARK: &str = "matrix_multiplication";

/// Resolve a benchmark identifier into the sizes and argument variants to
/// sweep. Unknown identifiers get a single empty variant (base invocation
/// only); whether the output can be verified is reported on the plan, and
/// the driver warns when it cannot.
pub fn resolve(config: &SweepConfig, benchmark: &str) -> Result<SweepPlan, SweepError> {
    if benchmark == UNSUPPORTED_BENCHMARK {
        return Err(SweepError::Unsupported {
            benchmark: benchmark.to_string(),
        });
    }

    let variants = config
        .variants
        .get(benchmark)
        .cloned()
        .unwrap_or_else(|| vec![String::new()]);

    let verifiable = config.verifiable.iter().any(|b| b == benchmark);

    Ok(SweepPlan {
        sizes: config.sizes.clone(),
        variants,
        verifiable,
    })
}
