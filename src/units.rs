use std::str::FromStr;

use crate::errors::SweepError;

/// Time units the benchmark binaries print after the elapsed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

/// Every unit the micro-protocol defines, for exhaustive table checks.
pub const ALL_UNITS: [Unit; 4] = [Unit::Nanos, Unit::Micros, Unit::Millis, Unit::Secs];

impl Unit {
    /// Convert a value in this unit to milliseconds. The factors are exact.
    pub fn to_millis(self, value: f64) -> f64 {
        match self {
            Unit::Nanos => value * 1e-6,
            Unit::Micros => value * 1e-3,
            Unit::Millis => value,
            Unit::Secs => value * 1e3,
        }
    }

    /// The suffix as the benchmarks print it. Note `μs` is multi-byte.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Nanos => "ns",
            Unit::Micros => "μs",
            Unit::Millis => "ms",
            Unit::Secs => "s",
        }
    }
}

impl FromStr for Unit {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, SweepError> {
        match s {
            "ns" => Ok(Unit::Nanos),
            "μs" => Ok(Unit::Micros),
            "ms" => Ok(Unit::Millis),
            "s" => Ok(Unit::Secs),
            other => Err(SweepError::UnsupportedUnit {
                unit: other.to_string(),
            }),
        }
    }
}
