use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::errors::SweepError;

/// Builds and runs a benchmark binary in-place; the binary name and the
/// per-run arguments are appended by the driver.
pub const DEFAULT_COMMAND_PREFIX: &str =
    "cargo run --release --features 1d --features float --bin";

/// Declarative description of a sweep: which sizes to run, how many samples
/// to take, which extra flags each benchmark gets, and which benchmarks are
/// expected to self-verify. Everything the resolver consults lives here, so
/// tests can inject their own tables instead of patching globals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    pub sizes: Vec<u64>,
    pub iterations: usize,
    pub command_prefix: String,
    /// Benchmark name -> extra argument variants, one sweep per variant.
    pub variants: BTreeMap<String, Vec<String>>,
    /// Benchmarks whose output is expected to contain a pass signal.
    pub verifiable: Vec<String>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        let mut variants = BTreeMap::new();
        variants.insert("convolution".to_string(), vec!["-k 3".to_string()]);
        variants.insert(
            "finite_impulse_response_filter".to_string(),
            vec!["-k 16".to_string(), "-k 32".to_string(), "-k 64".to_string()],
        );
        variants.insert("max_pooling".to_string(), vec!["--stride 2".to_string()]);
        variants.insert(
            "fast_fourier_transform_window".to_string(),
            vec!["-w 8".to_string(), "-w 128".to_string()],
        );

        SweepConfig {
            sizes: vec![1024, 2048, 4096],
            iterations: 5,
            command_prefix: DEFAULT_COMMAND_PREFIX.to_string(),
            variants,
            verifiable: vec![
                "relu".to_string(),
                "softmax".to_string(),
                "convolution".to_string(),
                "matrix_multiplication".to_string(),
                "max_pooling".to_string(),
            ],
        }
    }
}

impl SweepConfig {
    /// Load the sweep configuration.
    ///
    /// An explicit `--config` path wins and must exist. Otherwise the user
    /// config file is used if present, and the built-in tables if not.
    pub fn load(explicit: Option<&Path>) -> Result<SweepConfig> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => SweepConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<SweepConfig, SweepError> {
        let text = std::fs::read_to_string(path).map_err(|source| SweepError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| SweepError::ConfigParse {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
    }

    /// The reducer trims one sample off each end, so anything below 3
    /// iterations would leave an empty set to average.
    fn validate(&self) -> Result<(), SweepError> {
        if self.iterations < 3 {
            return Err(SweepError::TooFewIterations {
                got: self.iterations,
            });
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("benchsweep").join("benchmarks.toml"))
}
