// synthgen-core - Anomaly injection
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Applies a transient disturbance to its epicenter column and, if
//! `propagate` is set, to every column one dependency-hop away at half
//! severity. Propagation never recurses past that first hop.

use std::f64::consts::PI;

use indexmap::IndexMap;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::Warning;
use crate::model::{Anomaly, AnomalyKind, DependencyEdge};
use crate::window::{linspace, locate_window};

const PROPAGATION_DAMPING: f64 = 0.5;

pub fn apply(
    columns: &mut IndexMap<String, Vec<f64>>,
    timestamps: &[i64],
    anomaly: &Anomaly,
    dependencies: &[DependencyEdge],
    rng: &mut impl Rng,
    warnings: &mut Vec<Warning>,
) {
    let duration_ms = anomaly.duration_minutes as i64 * 60_000;
    let Some((start_idx, end_idx)) = locate_window(timestamps, anomaly.start_time_ms, duration_ms) else {
        return;
    };

    match columns.get_mut(&anomaly.epicenter_key) {
        Some(col) => apply_pattern(col, start_idx, end_idx, anomaly.kind, anomaly.severity, rng),
        None => {
            warnings.push(Warning::UnknownAnomalyEpicenter {
                anomaly_id: anomaly.id.clone(),
                key: anomaly.epicenter_key.clone(),
            });
            return;
        }
    }

    if !anomaly.propagate {
        return;
    }
    let children: Vec<String> = dependencies
        .iter()
        .filter(|d| d.parent_key == anomaly.epicenter_key)
        .map(|d| d.child_key.clone())
        .collect();
    for child in children {
        if let Some(col) = columns.get_mut(&child) {
            apply_pattern(
                col,
                start_idx,
                end_idx,
                anomaly.kind,
                anomaly.severity * PROPAGATION_DAMPING,
                rng,
            );
        }
    }
}

fn apply_pattern(col: &mut [f64], start_idx: usize, end_idx: usize, kind: AnomalyKind, severity: f64, rng: &mut impl Rng) {
    let end_idx = end_idx.min(col.len());
    if start_idx >= end_idx {
        return;
    }
    let window = &mut col[start_idx..end_idx];
    let d = window.len();

    match kind {
        AnomalyKind::Spike => {
            for (v, phase) in window.iter_mut().zip(linspace(0.0, PI, d)) {
                *v *= 1.0 + severity * (1.0 + 0.5 * phase.sin());
            }
        }
        AnomalyKind::Drop => {
            for (v, phase) in window.iter_mut().zip(linspace(0.0, PI, d)) {
                let factor = (1.0 - severity * (1.0 + 0.5 * phase.sin())).max(0.1);
                *v *= factor;
            }
        }
        AnomalyKind::Oscillation => {
            for (v, phase) in window.iter_mut().zip(linspace(0.0, 4.0 * PI, d)) {
                *v *= 1.0 + severity * phase.sin();
            }
        }
        AnomalyKind::Degradation => {
            for (v, progress) in window.iter_mut().zip(linspace(0.0, 1.0, d)) {
                let factor = (1.0 - severity * progress).max(0.2);
                *v *= factor;
            }
        }
        AnomalyKind::Outage => {
            for v in window.iter_mut() {
                *v *= 1.0 - severity;
            }
        }
        AnomalyKind::Congestion => {
            let dist = Normal::new(1.0, (0.3 * severity).max(0.0)).expect("std is non-negative");
            for v in window.iter_mut() {
                *v *= dist.sample(rng);
            }
        }
        AnomalyKind::Drift => {
            // Reserved: no redesigned behavior specified, treated as a no-op.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn flat_columns(n: usize, value: f64) -> IndexMap<String, Vec<f64>> {
        let mut columns = IndexMap::new();
        columns.insert("parent".to_string(), vec![value; n]);
        columns.insert("child".to_string(), vec![value; n]);
        columns
    }

    #[test]
    fn outage_scales_epicenter_down() {
        let timestamps: Vec<i64> = (0..10).map(|i| i * 60_000).collect();
        let mut columns = flat_columns(10, 100.0);
        let mut rng = StdRng::seed_from_u64(1);
        apply(
            &mut columns,
            &timestamps,
            &Anomaly {
                id: "a1".to_string(),
                kind: AnomalyKind::Outage,
                start_time_ms: 2 * 60_000,
                duration_minutes: 3,
                severity: 0.9,
                epicenter_key: "parent".to_string(),
                propagate: false,
                affected_entities: vec![],
            },
            &[],
            &mut rng,
            &mut Vec::new(),
        );
        assert!((columns["parent"][2] - 10.0).abs() < 1e-9);
        assert_eq!(columns["parent"][0], 100.0);
        assert_eq!(columns["child"], vec![100.0; 10]);
    }

    #[test]
    fn propagation_applies_halved_severity_one_hop() {
        let timestamps: Vec<i64> = (0..10).map(|i| i * 60_000).collect();
        let mut columns = flat_columns(10, 100.0);
        let mut rng = StdRng::seed_from_u64(2);
        apply(
            &mut columns,
            &timestamps,
            &Anomaly {
                id: "a2".to_string(),
                kind: AnomalyKind::Outage,
                start_time_ms: 0,
                duration_minutes: 10,
                severity: 0.8,
                epicenter_key: "parent".to_string(),
                propagate: true,
                affected_entities: vec![],
            },
            &[DependencyEdge {
                parent_key: "parent".to_string(),
                child_key: "child".to_string(),
                influence_factor: 1.0,
                delay_minutes: 0,
            }],
            &mut rng,
            &mut Vec::new(),
        );
        assert!((columns["parent"][0] - 20.0).abs() < 1e-9);
        assert!((columns["child"][0] - 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_epicenter_warns() {
        let timestamps: Vec<i64> = (0..5).map(|i| i * 60_000).collect();
        let mut columns = flat_columns(5, 1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut warnings = Vec::new();
        apply(
            &mut columns,
            &timestamps,
            &Anomaly {
                id: "a3".to_string(),
                kind: AnomalyKind::Spike,
                start_time_ms: 0,
                duration_minutes: 1,
                severity: 0.5,
                epicenter_key: "missing".to_string(),
                propagate: false,
                affected_entities: vec![],
            },
            &[],
            &mut rng,
            &mut warnings,
        );
        assert_eq!(warnings.len(), 1);
    }
}
