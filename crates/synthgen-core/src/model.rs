// synthgen-core - Data model
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! In-memory configuration model for a generation run.
//!
//! These types are the shared vocabulary between `synthgen-core` (which
//! consumes them to produce a [`crate::table::Table`]), `synthgen-config`
//! (which loads, saves and validates them) and `synthgen-templates` (which
//! builds them from domain presets).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A sampling distribution for a single metric.
///
/// `mean` is always required; the remaining fields are interpreted per
/// `kind` (see the moment-matching formulas in [`crate::sampler`]).
/// `params` carries distribution-specific extras that don't warrant their
/// own field (`cv` for Gamma, `rate` for Exponential).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    pub kind: DistributionKind,
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub params: HashMap<String, f64>,
}

impl DistributionSpec {
    pub fn new(kind: DistributionKind, mean: f64) -> Self {
        Self {
            kind,
            mean,
            std: None,
            min_value: None,
            max_value: None,
            params: HashMap::new(),
        }
    }

    pub fn with_std(mut self, std: f64) -> Self {
        self.std = Some(std);
        self
    }

    pub fn with_bounds(mut self, min_value: f64, max_value: f64) -> Self {
        self.min_value = Some(min_value);
        self.max_value = Some(max_value);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: f64) -> Self {
        self.params.insert(key.into(), value);
        self
    }
}

/// Which sampling distribution a metric draws from.
///
/// Unknown/unrecognized values deserialize to `Unknown`, which the sampler
/// treats as `Normal` rather than rejecting the config outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    Normal,
    Poisson,
    Gamma,
    LogNormal,
    Beta,
    Exponential,
    Uniform,
    #[serde(other)]
    Unknown,
}

/// One named signal produced by an [`Entity`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: String,
    pub distribution: DistributionSpec,
    /// Metric keys (`"{entity_id}_{name}"`) this metric's mean scales with.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Reserved for downstream consumers; not interpreted by the pipeline.
    #[serde(default)]
    pub constraints: HashMap<String, f64>,
}

/// A source of metrics: a sensor, a site, a vehicle, whatever the domain
/// template calls it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_id: String,
    #[serde(default)]
    pub entity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub metrics: Vec<Metric>,
}

impl Entity {
    /// Column key for one of this entity's metrics.
    pub fn metric_key(&self, metric_name: &str) -> String {
        format!("{}_{}", self.entity_id, metric_name)
    }
}

/// The time span and sample cadence of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Unix epoch milliseconds, inclusive.
    pub start_ms: i64,
    /// Unix epoch milliseconds, inclusive.
    pub end_ms: i64,
    pub granularity_minutes: u32,
}

/// A Gaussian-copula correlation target between two metric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEdge {
    pub source_key: String,
    pub target_key: String,
    /// Target Pearson-like coefficient in `[-1, 1]`.
    pub coefficient: f64,
    /// Reserved: lagged coupling is not yet implemented (see design notes).
    #[serde(default)]
    pub lag: i64,
}

/// A one-hop dependency used for anomaly propagation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub parent_key: String,
    pub child_key: String,
    #[serde(default)]
    pub influence_factor: f64,
    #[serde(default)]
    pub delay_minutes: u32,
}

/// Multiplicative diurnal/weekly modulation applied uniformly to all columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalitySpec {
    pub period_hours: f64,
    pub amplitude: f64,
    pub harmonics: u32,
    #[serde(default)]
    pub phase_shift: f64,
}

/// Per-column ARMA smoothing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmaSpec {
    pub ar_order: usize,
    pub ma_order: usize,
    #[serde(default)]
    pub ar_coef: Vec<f64>,
    #[serde(default)]
    pub ma_coef: Vec<f64>,
    pub noise_std: f64,
}

/// Kind of structural change a [`ChangePoint`] introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Step,
    Ramp,
    /// Reserved for a future seasonal-regime shift; currently a no-op.
    Seasonal,
}

/// A scheduled structural shift applied to one or more columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePoint {
    pub id: String,
    pub kind: ChangeKind,
    pub affected_keys: Vec<String>,
    pub start_time_ms: i64,
    pub duration_minutes: u32,
    /// Fractional change, e.g. `0.2` for a 20% step up.
    pub magnitude: f64,
}

/// Kind of transient disturbance an [`Anomaly`] introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Spike,
    Drop,
    Oscillation,
    Congestion,
    Degradation,
    Outage,
    /// Reserved for a future sustained-bias pattern; currently a no-op.
    Drift,
}

/// A scheduled anomalous event centered on one metric, optionally
/// propagating to its dependents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: String,
    pub kind: AnomalyKind,
    pub start_time_ms: i64,
    pub duration_minutes: u32,
    /// Severity in roughly `[0, 1]`; interpretation is pattern-specific.
    pub severity: f64,
    pub epicenter_key: String,
    #[serde(default = "default_propagate")]
    pub propagate: bool,
    /// Entities beyond the epicenter's own this anomaly is scoped to.
    /// Recorded and round-tripped; `anomaly::apply` derives the affected
    /// columns from `epicenter_key` and the dependency graph, not this list.
    #[serde(default)]
    pub affected_entities: Vec<String>,
}

fn default_propagate() -> bool {
    true
}

/// The full input to a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub time_window: TimeWindow,
    pub entities: Vec<Entity>,
    #[serde(default)]
    pub correlations: Vec<CorrelationEdge>,
    #[serde(default)]
    pub dependencies: Vec<DependencyEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<SeasonalitySpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arma: Option<ArmaSpec>,
    #[serde(default)]
    pub change_points: Vec<ChangePoint>,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
}

impl GeneratorConfig {
    /// Column keys in the order they'll appear in the generated table:
    /// entities in declaration order, metrics within each entity in
    /// declaration order.
    pub fn metric_keys(&self) -> Vec<String> {
        self.entities
            .iter()
            .flat_map(|e| e.metrics.iter().map(move |m| e.metric_key(&m.name)))
            .collect()
    }
}
