// synthgen-core - Error and warning types
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Error and warning types for the generation pipeline.

use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort generation before or during a run.
///
/// These correspond to the `ConfigError` taxonomy: structural problems with
/// the config that make generation meaningless, as opposed to a reference to
/// an unknown key (see [`Warning`]), which is logged and skipped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("time window end ({end_ms}) must be after start ({start_ms})")]
    InvalidTimeWindow { start_ms: i64, end_ms: i64 },

    #[error("granularity must be positive, got {0} minutes")]
    NonPositiveGranularity(i64),

    #[error("metric '{key}': {reason}")]
    InvalidDistributionParameter { key: String, reason: String },

    #[error("config has no entities")]
    NoEntities,

    #[error("config has no metrics")]
    NoMetrics,
}

/// Non-fatal conditions logged during generation; generation proceeds.
///
/// Corresponds to the `ReferenceWarning` taxonomy: a correlation, change
/// point, dependency, or anomaly names a metric key that doesn't exist among
/// the generated columns.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    UnknownCorrelationKey { source: String, target: String },
    UnknownChangePointKey { change_point_id: String, key: String },
    UnknownAnomalyEpicenter { anomaly_id: String, key: String },
    UnknownDependencyKey { parent: String, child: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::UnknownCorrelationKey { source, target } => write!(
                f,
                "correlation references unknown key(s): {source} -> {target}"
            ),
            Warning::UnknownChangePointKey { change_point_id, key } => write!(
                f,
                "change point '{change_point_id}' references unknown key '{key}'"
            ),
            Warning::UnknownAnomalyEpicenter { anomaly_id, key } => write!(
                f,
                "anomaly '{anomaly_id}' references unknown epicenter key '{key}'"
            ),
            Warning::UnknownDependencyKey { parent, child } => write!(
                f,
                "dependency references unknown key(s): {parent} -> {child}"
            ),
        }
    }
}
