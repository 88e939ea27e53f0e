// synthgen-templates - Manufacturing domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! A factory line: motor vibration/temperature, pressure, flow and power
//! draw, with a recurring outage anomaly standing in for an unplanned stop.

use synthgen_core::model::{Anomaly, AnomalyKind, ArmaSpec, CorrelationEdge, GeneratorConfig, TimeWindow};

use crate::common::{entity, metric, normal, time_window_for_hours};

/// Builds an 8-hour shift dataset, one sample per 10 seconds.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(8.0, 1), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let line = entity(
        "line1",
        "production_line",
        vec![
            metric("motor_vibration", "g", "mechanical", normal(0.6, 0.08, 0.1, 2.0)),
            metric("motor_temp", "C", "thermal", normal(65.0, 3.0, 40.0, 85.0)),
            metric("pressure_outlet", "bar", "process", normal(3.5, 0.1, 2.5, 4.5)),
            metric("flow_rate", "L/min", "process", normal(125.0, 4.0, 80.0, 160.0)),
            metric("power_consumption", "kW", "power", normal(11.0, 1.0, 5.0, 16.0)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![line],
        correlations: vec![CorrelationEdge {
            source_key: "line1_motor_vibration".to_string(),
            target_key: "line1_power_consumption".to_string(),
            coefficient: 0.7,
            lag: 0,
        }],
        dependencies: vec![],
        seasonality: None,
        arma: Some(ArmaSpec {
            ar_order: 1,
            ma_order: 1,
            ar_coef: vec![0.6],
            ma_coef: vec![0.3],
            noise_std: 0.05,
        }),
        change_points: vec![],
        anomalies: vec![Anomaly {
            id: "unplanned_stop".to_string(),
            kind: AnomalyKind::Outage,
            start_time_ms: (time_window.end_ms / 2).max(0),
            duration_minutes: 15,
            severity: 0.9,
            epicenter_key: "line1_flow_rate".to_string(),
            propagate: false,
            affected_entities: vec![],
        }],
    }
}
