// synthgen-core - Seasonal modulation
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Applies a shared multiplicative harmonic modulation to every column, so
//! a metric's diurnal or weekly shape rides on top of its own distribution
//! without changing its scale on average.

use std::f64::consts::PI;

use indexmap::IndexMap;

use crate::model::SeasonalitySpec;

/// Multiplies every value by `1 + sum_{k=1..=harmonics} (amplitude / k) *
/// sin(2*pi*k*h / period_hours + phase_shift)`, where `h` is hours elapsed
/// since the series' first timestamp.
pub fn apply(columns: &mut IndexMap<String, Vec<f64>>, timestamps: &[i64], spec: &SeasonalitySpec) {
    if timestamps.is_empty() || spec.harmonics == 0 {
        return;
    }
    let t0 = timestamps[0];
    let hours: Vec<f64> = timestamps.iter().map(|&t| (t - t0) as f64 / 3_600_000.0).collect();
    let factors: Vec<f64> = hours
        .iter()
        .map(|&h| {
            let mut s = 0.0;
            for k in 1..=spec.harmonics {
                let k = k as f64;
                s += (spec.amplitude / k) * (2.0 * PI * k * h / spec.period_hours + spec.phase_shift).sin();
            }
            1.0 + s
        })
        .collect();

    for col in columns.values_mut() {
        for (v, &factor) in col.iter_mut().zip(&factors) {
            *v *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_harmonic_matches_closed_form() {
        let timestamps: Vec<i64> = (0..24).map(|h| h * 3_600_000).collect();
        let mut columns = IndexMap::new();
        columns.insert("x".to_string(), vec![10.0; 24]);
        let spec = SeasonalitySpec {
            period_hours: 24.0,
            amplitude: 0.5,
            harmonics: 1,
            phase_shift: 0.0,
        };
        apply(&mut columns, &timestamps, &spec);
        // at h=6, sin(2*pi*6/24) = sin(pi/2) = 1 -> factor 1.5 -> value 15
        assert!((columns["x"][6] - 15.0).abs() < 1e-9);
        // at h=0, sin(0) = 0 -> factor 1 -> value unchanged
        assert!((columns["x"][0] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn zero_harmonics_is_a_no_op() {
        let timestamps: Vec<i64> = (0..5).map(|h| h * 3_600_000).collect();
        let mut columns = IndexMap::new();
        columns.insert("x".to_string(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let before = columns.clone();
        apply(
            &mut columns,
            &timestamps,
            &SeasonalitySpec {
                period_hours: 24.0,
                amplitude: 1.0,
                harmonics: 0,
                phase_shift: 0.0,
            },
        );
        assert_eq!(columns, before);
    }
}
