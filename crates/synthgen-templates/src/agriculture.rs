// synthgen-templates - Agriculture domain
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Field sensors monitoring crop conditions and a weather station, with a
//! diurnal temperature/humidity cycle and sparse rainfall.

use synthgen_core::model::{GeneratorConfig, SeasonalitySpec, TimeWindow};

use crate::common::{entity, lognormal, metric, normal, poisson, time_window_for_hours};

/// Builds a 24h farm dataset: soil temp/moisture, air temp/humidity, wind
/// speed and rainfall, one hourly sample.
pub fn build(seed: u64) -> GeneratorConfig {
    build_with_window(time_window_for_hours(24.0, 60), seed)
}

pub fn build_with_window(time_window: TimeWindow, seed: u64) -> GeneratorConfig {
    let field = entity(
        "field1",
        "farm_plot",
        vec![
            metric("soil_temp", "C", "environment", normal(20.0, 2.0, 5.0, 35.0)),
            metric("soil_moisture", "%", "environment", normal(55.0, 6.0, 10.0, 90.0)),
            metric("air_temp", "C", "environment", normal(20.0, 3.0, -5.0, 42.0)),
            metric("air_humidity", "%", "environment", normal(60.0, 8.0, 20.0, 98.0)),
            metric("wind_speed", "m/s", "environment", lognormal(3.0, 2.0, 25.0)),
            metric("rain_gauge", "mm", "environment", poisson(0.4, 50.0)),
        ],
    );

    GeneratorConfig {
        seed,
        time_window,
        entities: vec![field],
        correlations: vec![],
        dependencies: vec![],
        seasonality: Some(SeasonalitySpec {
            period_hours: 24.0,
            amplitude: 0.3,
            harmonics: 2,
            phase_shift: 0.0,
        }),
        arma: None,
        change_points: vec![],
        anomalies: vec![],
    }
}
