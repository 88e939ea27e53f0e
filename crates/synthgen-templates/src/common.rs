// synthgen-templates - Shared builder helpers
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

use synthgen_core::model::{DistributionKind, DistributionSpec, Entity, Metric, TimeWindow};

pub fn time_window_for_hours(hours: f64, granularity_minutes: u32) -> TimeWindow {
    TimeWindow {
        start_ms: 0,
        end_ms: (hours * 3_600_000.0) as i64,
        granularity_minutes,
    }
}

pub fn metric(name: &str, unit: &str, category: &str, distribution: DistributionSpec) -> Metric {
    Metric {
        name: name.to_string(),
        display_name: name.replace('_', " "),
        unit: unit.to_string(),
        category: category.to_string(),
        distribution,
        dependencies: vec![],
        constraints: Default::default(),
    }
}

pub fn entity(entity_id: &str, entity_type: &str, metrics: Vec<Metric>) -> Entity {
    Entity {
        entity_id: entity_id.to_string(),
        entity_type: entity_type.to_string(),
        capacity: None,
        metadata: Default::default(),
        metrics,
    }
}

pub fn normal(mean: f64, std: f64, min: f64, max: f64) -> DistributionSpec {
    DistributionSpec::new(DistributionKind::Normal, mean)
        .with_std(std)
        .with_bounds(min, max)
}

pub fn lognormal(mean: f64, std: f64, max: f64) -> DistributionSpec {
    DistributionSpec::new(DistributionKind::LogNormal, mean).with_std(std).with_bounds(0.0, max)
}

pub fn poisson(mean: f64, max: f64) -> DistributionSpec {
    DistributionSpec::new(DistributionKind::Poisson, mean).with_bounds(0.0, max)
}

pub fn uniform(min: f64, max: f64) -> DistributionSpec {
    let mean = (min + max) / 2.0;
    DistributionSpec::new(DistributionKind::Uniform, mean).with_bounds(min, max)
}
