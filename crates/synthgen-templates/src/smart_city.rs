// synthgen-templates - Smart city domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! A single intersection's traffic, air quality and parking sensors, with
//! a morning-rush congestion anomaly on traffic speed that propagates to
//! air quality.

use synthgen_core::model::{Anomaly, AnomalyKind, CorrelationEdge, DependencyEdge, GeneratorConfig, TimeWindow};

use crate::common::{entity, metric, normal, time_window_for_hours};

/// Builds a 24h intersection dataset, one sample per minute.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(24.0, 1), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let intersection = entity(
        "intersection1",
        "traffic_node",
        vec![
            metric("traffic_count", "vehicles/min", "traffic", normal(25.0, 8.0, 0.0, 60.0)),
            metric("traffic_speed", "km/h", "traffic", normal(35.0, 8.0, 0.0, 60.0)),
            metric("air_quality_pm25", "ug/m3", "environment", normal(30.0, 8.0, 5.0, 150.0)),
            metric("parking_occupancy", "%", "infrastructure", normal(50.0, 15.0, 0.0, 100.0)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![intersection],
        correlations: vec![CorrelationEdge {
            source_key: "intersection1_traffic_count".to_string(),
            target_key: "intersection1_traffic_speed".to_string(),
            coefficient: -0.7,
            lag: 0,
        }],
        dependencies: vec![DependencyEdge {
            parent_key: "intersection1_traffic_speed".to_string(),
            child_key: "intersection1_air_quality_pm25".to_string(),
            influence_factor: 1.0,
            delay_minutes: 0,
        }],
        seasonality: None,
        arma: None,
        change_points: vec![],
        anomalies: vec![Anomaly {
            id: "morning_rush_congestion".to_string(),
            kind: AnomalyKind::Drop,
            start_time_ms: 7 * 3_600_000,
            duration_minutes: 90,
            severity: 0.5,
            epicenter_key: "intersection1_traffic_speed".to_string(),
            propagate: true,
            affected_entities: vec![],
        }],
    }
}
