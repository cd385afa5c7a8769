use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("{benchmark} is not supported")]
    Unsupported { benchmark: String },

    #[error("benchmark failed")]
    VerificationFailed,

    #[error("could not find elapsed time")]
    NoElapsedLine,

    #[error("unit not supported")]
    UnsupportedUnit { unit: String },

    #[error("failed to start benchmark process: {source}")]
    Spawn { source: std::io::Error },

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {detail}")]
    ConfigParse { path: PathBuf, detail: String },

    #[error("iterations must be at least 3 (got {got}): trimming min and max would leave nothing to average")]
    TooFewIterations { got: usize },
}

impl SweepError {
    /// Diagnostics end the sweep with a message on stdout and a zero exit.
    /// Everything else (spawn and config failures) propagates as a real
    /// process failure on stderr.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            SweepError::Unsupported { .. }
                | SweepError::VerificationFailed
                | SweepError::NoElapsedLine
                | SweepError::UnsupportedUnit { .. }
        )
    }
}
