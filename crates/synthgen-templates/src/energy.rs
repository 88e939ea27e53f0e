// synthgen-templates - Energy / smart grid domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! A residential grid feeder: three-phase voltage (tightly coupled),
//! current with an evening peak, power factor, and line frequency.

use synthgen_core::model::{CorrelationEdge, GeneratorConfig, SeasonalitySpec, TimeWindow};

use crate::common::{entity, metric, normal, time_window_for_hours};

/// Builds a 24h feeder dataset, one sample per minute.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(24.0, 1), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let feeder = entity(
        "feeder1",
        "grid_feeder",
        vec![
            metric("voltage_l1", "V", "power", normal(230.0, 1.0, 220.0, 240.0)),
            metric("voltage_l2", "V", "power", normal(230.0, 1.0, 220.0, 240.0)),
            metric("voltage_l3", "V", "power", normal(230.0, 1.0, 220.0, 240.0)),
            metric("current_l1", "A", "power", normal(35.0, 8.0, 0.0, 100.0)),
            metric("power_factor", "ratio", "power", normal(0.95, 0.02, 0.85, 1.0)),
            metric("frequency", "Hz", "power", normal(50.0, 0.02, 49.9, 50.1)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![feeder],
        correlations: vec![
            CorrelationEdge {
                source_key: "feeder1_voltage_l1".to_string(),
                target_key: "feeder1_voltage_l2".to_string(),
                coefficient: 0.95,
                lag: 0,
            },
            CorrelationEdge {
                source_key: "feeder1_voltage_l1".to_string(),
                target_key: "feeder1_voltage_l3".to_string(),
                coefficient: 0.95,
                lag: 0,
            },
        ],
        dependencies: vec![],
        seasonality: Some(SeasonalitySpec {
            period_hours: 24.0,
            amplitude: 0.2,
            harmonics: 1,
            phase_shift: std::f64::consts::PI,
        }),
        arma: None,
        change_points: vec![],
        anomalies: vec![],
    }
}
