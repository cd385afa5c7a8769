/// Trimmed mean: sort ascending, drop the single minimum and the single
/// maximum, and average the rest.
///
/// This deliberately trims exactly one sample off each end regardless of
/// sample count — enough to absorb one anomalous run (cold cache, OS
/// jitter) without needing a larger sample. The caller guarantees at least
/// 3 samples; config validation enforces that bound before any run starts.
pub fn trimmed_mean(samples: &[f64]) -> f64 {
    debug_assert!(samples.len() >= 3);

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let kept = &sorted[1..sorted.len() - 1];
    kept.iter().sum::<f64>() / kept.len() as f64
}
