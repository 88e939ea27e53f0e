// synthgen-templates - Logistics / cold chain domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! A refrigerated trailer en route: tightly controlled cargo temperature,
//! ambient temperature, fuel level, and a door-open change point that lets
//! cargo temperature drift up.

use synthgen_core::model::{ChangeKind, ChangePoint, GeneratorConfig, TimeWindow};

use crate::common::{entity, metric, normal, time_window_for_hours};

/// Builds a 12h trip dataset, one sample per minute.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(12.0, 1), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let trailer = entity(
        "trailer1",
        "refrigerated_trailer",
        vec![
            metric("cargo_temp", "C", "cold_chain", normal(5.0, 0.3, 2.0, 8.0)),
            metric("ambient_temp", "C", "environment", normal(18.0, 4.0, -10.0, 40.0)),
            metric("fuel_level", "%", "vehicle", normal(70.0, 5.0, 10.0, 100.0)),
            metric("gps_speed", "km/h", "vehicle", normal(80.0, 10.0, 0.0, 120.0)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![trailer],
        correlations: vec![],
        dependencies: vec![],
        seasonality: None,
        arma: None,
        change_points: vec![ChangePoint {
            id: "door_open_delivery_stop".to_string(),
            kind: ChangeKind::Ramp,
            affected_keys: vec!["trailer1_cargo_temp".to_string()],
            start_time_ms: 4 * 3_600_000,
            duration_minutes: 10,
            magnitude: 0.4,
        }],
        anomalies: vec![],
    }
}
