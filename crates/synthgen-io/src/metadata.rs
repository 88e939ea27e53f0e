// synthgen-io - Metadata sidecar
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Writes a JSON sidecar describing a generation run: when it ran, how
//! many rows/entities/metrics it produced, the time window and seed used,
//! and the resulting column list.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use synthgen_core::model::GeneratorConfig;
use synthgen_core::Table;

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunMetadata {
    pub generated_at: DateTime<Utc>,
    pub row_count: usize,
    pub entity_count: usize,
    pub metric_count: usize,
    pub seed: u64,
    pub start_ms: i64,
    pub end_ms: i64,
    pub granularity_minutes: u32,
    pub columns: Vec<String>,
}

impl RunMetadata {
    pub fn from_run(config: &GeneratorConfig, table: &Table, generated_at: DateTime<Utc>) -> Self {
        let metric_count = config.entities.iter().map(|e| e.metrics.len()).sum();
        Self {
            generated_at,
            row_count: table.num_rows(),
            entity_count: config.entities.len(),
            metric_count,
            seed: config.seed,
            start_ms: config.time_window.start_ms,
            end_ms: config.time_window.end_ms,
            granularity_minutes: config.time_window.granularity_minutes,
            columns: table.column_keys().map(|k| k.to_string()).collect(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use synthgen_core::model::{DistributionKind, DistributionSpec, Entity, Metric, TimeWindow};

    #[test]
    fn captures_counts_from_config_and_table() {
        let config = GeneratorConfig {
            seed: 5,
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
                metrics: vec![
                    Metric {
                        name: "a".to_string(),
                        display_name: String::new(),
                        unit: String::new(),
                        category: String::new(),
                        distribution: DistributionSpec::new(DistributionKind::Normal, 1.0),
                        dependencies: vec![],
                        constraints: Default::default(),
                    },
                    Metric {
                        name: "b".to_string(),
                        display_name: String::new(),
                        unit: String::new(),
                        category: String::new(),
                        distribution: DistributionSpec::new(DistributionKind::Normal, 1.0),
                        dependencies: vec![],
                        constraints: Default::default(),
                    },
                ],
            }],
            correlations: vec![],
            dependencies: vec![],
            seasonality: None,
            arma: None,
            change_points: vec![],
            anomalies: vec![],
        };
        let mut columns = IndexMap::new();
        columns.insert("e1_a".to_string(), vec![1.0, 2.0]);
        columns.insert("e1_b".to_string(), vec![3.0, 4.0]);
        let table = Table {
            timestamps: vec![0, 1000],
            columns,
        };

        let metadata = RunMetadata::from_run(&config, &table, Utc::now());
        assert_eq!(metadata.row_count, 2);
        assert_eq!(metadata.entity_count, 1);
        assert_eq!(metadata.metric_count, 2);
        assert_eq!(metadata.columns, vec!["e1_a".to_string(), "e1_b".to_string()]);
    }
}
