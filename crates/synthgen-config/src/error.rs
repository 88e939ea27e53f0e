// synthgen-config - Error types
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invariant(#[from] synthgen_core::GenerateError),

    #[error("correlation coefficient for {source}->{target} must be in [-1, 1], got {coefficient}")]
    CorrelationOutOfRange {
        source: String,
        target: String,
        coefficient: f64,
    },

    #[error("anomaly '{id}' severity must be in [0, 1], got {severity}")]
    SeverityOutOfRange { id: String, severity: f64 },
}

/// Non-fatal config issues: a correlation, dependency, change point or
/// anomaly names a metric key that isn't declared by any entity. Loading
/// proceeds; [`synthgen_core::generator::generate`] will skip the
/// offending reference and report the same condition as a
/// [`synthgen_core::Warning`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning(pub String);

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
