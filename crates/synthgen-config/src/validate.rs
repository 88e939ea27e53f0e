// synthgen-config - Config validation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Validates a [`GeneratorConfig`] before it reaches the generation
//! pipeline: hard structural checks abort loading, soft reference checks
//! collect warnings but let the config through (the pipeline degrades
//! unresolvable references to warnings of its own, per §7.2 of the
//! reference warning taxonomy).

use std::collections::HashSet;

use synthgen_core::model::GeneratorConfig;

use crate::error::{ConfigError, ConfigWarning, Result};

/// Runs all hard and soft checks. Returns the soft-check warnings on
/// success; returns the first hard-check failure as an error.
pub fn validate(config: &GeneratorConfig) -> Result<Vec<ConfigWarning>> {
    synthgen_core::generator::validate(config)?;

    for edge in &config.correlations {
        if !(-1.0..=1.0).contains(&edge.coefficient) {
            return Err(ConfigError::CorrelationOutOfRange {
                source: edge.source_key.clone(),
                target: edge.target_key.clone(),
                coefficient: edge.coefficient,
            });
        }
    }
    for anomaly in &config.anomalies {
        if !(0.0..=1.0).contains(&anomaly.severity) {
            return Err(ConfigError::SeverityOutOfRange {
                id: anomaly.id.clone(),
                severity: anomaly.severity,
            });
        }
    }

    Ok(collect_reference_warnings(config))
}

fn collect_reference_warnings(config: &GeneratorConfig) -> Vec<ConfigWarning> {
    let known: HashSet<String> = config.metric_keys().into_iter().collect();
    let mut warnings = Vec::new();

    for edge in &config.correlations {
        if !known.contains(&edge.source_key) || !known.contains(&edge.target_key) {
            warnings.push(ConfigWarning(format!(
                "correlation references unknown key(s): {} -> {}",
                edge.source_key, edge.target_key
            )));
        }
    }
    for edge in &config.dependencies {
        if !known.contains(&edge.parent_key) || !known.contains(&edge.child_key) {
            warnings.push(ConfigWarning(format!(
                "dependency references unknown key(s): {} -> {}",
                edge.parent_key, edge.child_key
            )));
        }
    }
    for change_point in &config.change_points {
        for key in &change_point.affected_keys {
            if !known.contains(key) {
                warnings.push(ConfigWarning(format!(
                    "change point '{}' references unknown key '{}'",
                    change_point.id, key
                )));
            }
        }
    }
    for anomaly in &config.anomalies {
        if !known.contains(&anomaly.epicenter_key) {
            warnings.push(ConfigWarning(format!(
                "anomaly '{}' references unknown epicenter key '{}'",
                anomaly.id, anomaly.epicenter_key
            )));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthgen_core::model::{
        CorrelationEdge, DistributionKind, DistributionSpec, Entity, Metric, TimeWindow,
    };

    fn base_config() -> GeneratorConfig {
        GeneratorConfig {
            seed: 1,
            time_window: TimeWindow {
                start_ms: 0,
                end_ms: 1000,
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
                    distribution: DistributionSpec::new(DistributionKind::Normal, 1.0),
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
    fn clean_config_has_no_warnings() {
        let warnings = validate(&base_config()).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn out_of_range_coefficient_is_rejected() {
        let mut config = base_config();
        config.correlations.push(CorrelationEdge {
            source_key: "e1_m1".to_string(),
            target_key: "e1_m1".to_string(),
            coefficient: 1.5,
            lag: 0,
        });
        assert!(matches!(
            validate(&config),
            Err(ConfigError::CorrelationOutOfRange { .. })
        ));
    }

    #[test]
    fn unknown_key_is_a_warning_not_an_error() {
        let mut config = base_config();
        config.correlations.push(CorrelationEdge {
            source_key: "e1_m1".to_string(),
            target_key: "nope".to_string(),
            coefficient: 0.5,
            lag: 0,
        });
        let warnings = validate(&config).unwrap();
        assert_eq!(warnings.len(), 1);
    }
}
