// synthgen-config - Config loading and validation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Loads a [`synthgen_core::model::GeneratorConfig`] from JSON, validates
//! it, and saves it back. The in-memory model itself lives in
//! `synthgen-core` so the pipeline and the loader share one definition.

pub mod error;
pub mod validate;

use std::path::Path;

use synthgen_core::model::GeneratorConfig;

pub use error::{ConfigError, ConfigWarning, Result};
pub use validate::validate;

/// Parses `json` into a [`GeneratorConfig`] and validates it. Returns the
/// config plus any soft reference warnings.
pub fn load_from_str(json: &str) -> Result<(GeneratorConfig, Vec<ConfigWarning>)> {
    let config: GeneratorConfig = serde_json::from_str(json)?;
    let warnings = validate(&config)?;
    Ok((config, warnings))
}

/// Reads and parses a config file, then validates it.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<(GeneratorConfig, Vec<ConfigWarning>)> {
    let json = std::fs::read_to_string(path)?;
    load_from_str(&json)
}

/// Serializes `config` as pretty JSON.
pub fn to_json(config: &GeneratorConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Writes `config` as pretty JSON to `path`.
pub fn save_to_file(config: &GeneratorConfig, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(config)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthgen_core::model::{DistributionKind, DistributionSpec, Entity, Metric, TimeWindow};

    fn sample_config() -> GeneratorConfig {
        GeneratorConfig {
            seed: 7,
            time_window: TimeWindow {
                start_ms: 0,
                end_ms: 60_000,
                granularity_minutes: 1,
            },
            entities: vec![Entity {
                entity_id: "e1".to_string(),
                entity_type: "generic".to_string(),
                capacity: None,
                metadata: Default::default(),
                metrics: vec![Metric {
                    name: "m1".to_string(),
                    display_name: String::new(),
                    unit: String::new(),
                    category: String::new(),
                    distribution: DistributionSpec::new(DistributionKind::Normal, 1.0).with_std(0.1),
                    dependencies: vec![],
                    constraints: Default::default(),
                }],
            }],
            correlations: vec![],
            dependencies: vec![],
            seasonality: None,
            arma: None,
            change_points: vec![],
            anomalies: vec![],
        }
    }

    #[test]
    fn round_trips_through_json() {
        let config = sample_config();
        let json = to_json(&config).unwrap();
        let (loaded, warnings) = load_from_str(&json).unwrap();
        assert_eq!(loaded, config);
        assert!(warnings.is_empty());
    }

    #[test]
    fn round_trips_through_a_file() {
        let config = sample_config();
        let file = tempfile::NamedTempFile::new().unwrap();
        save_to_file(&config, file.path()).unwrap();
        let (loaded, _) = load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(load_from_str("{not json"), Err(ConfigError::Parse(_))));
    }
}
