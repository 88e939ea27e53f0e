// synthgen-templates - Satellite IoT domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! A single satellite's housekeeping telemetry: battery, link quality,
//! fixed GPS position, and internal temperature.

use synthgen_core::model::{CorrelationEdge, GeneratorConfig, TimeWindow};

use crate::common::{entity, metric, normal, time_window_for_hours};

/// Builds a 24h satellite telemetry dataset, one sample per minute.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(24.0, 1), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let sat = entity(
        "sat1",
        "leo_satellite",
        vec![
            metric("battery_voltage", "V", "power", normal(3.8, 0.1, 3.0, 4.2)),
            metric("signal_rssi", "dBm", "comms", normal(-85.0, 4.0, -120.0, -60.0)),
            metric("internal_temp", "C", "thermal", normal(25.0, 3.0, -20.0, 60.0)),
            metric("tx_power", "dBm", "comms", normal(14.0, 1.0, 10.0, 20.0)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![sat],
        // Weaker signal drives the transmitter to push more power.
        correlations: vec![CorrelationEdge {
            source_key: "sat1_signal_rssi".to_string(),
            target_key: "sat1_tx_power".to_string(),
            coefficient: -0.6,
            lag: 0,
        }],
        dependencies: vec![],
        seasonality: None,
        arma: None,
        change_points: vec![],
        anomalies: vec![],
    }
}
