// synthgen-core - Change points
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Applies a one-time structural shift to a fixed window of one or more
//! columns: a step multiplies everything from the start onward, a ramp
//! eases into the same multiplier across the window and then holds it.

use indexmap::IndexMap;

use crate::error::Warning;
use crate::model::{ChangeKind, ChangePoint};
use crate::window::{linspace, locate_window};

pub fn apply(
    columns: &mut IndexMap<String, Vec<f64>>,
    timestamps: &[i64],
    change_point: &ChangePoint,
    warnings: &mut Vec<Warning>,
) {
    let duration_ms = change_point.duration_minutes as i64 * 60_000;
    let Some((start_idx, end_idx)) = locate_window(timestamps, change_point.start_time_ms, duration_ms) else {
        return;
    };

    for key in &change_point.affected_keys {
        let Some(col) = columns.get_mut(key) else {
            warnings.push(Warning::UnknownChangePointKey {
                change_point_id: change_point.id.clone(),
                key: key.clone(),
            });
            continue;
        };
        match change_point.kind {
            ChangeKind::Step => {
                for v in col[start_idx..].iter_mut() {
                    *v *= 1.0 + change_point.magnitude;
                }
            }
            ChangeKind::Ramp => {
                let ramp_len = end_idx.saturating_sub(start_idx);
                if ramp_len > 0 {
                    let progress = linspace(0.0, change_point.magnitude, ramp_len);
                    for (v, p) in col[start_idx..end_idx].iter_mut().zip(progress) {
                        *v *= 1.0 + p;
                    }
                }
                for v in col[end_idx..].iter_mut() {
                    *v *= 1.0 + change_point.magnitude;
                }
            }
            ChangeKind::Seasonal => {
                // Reserved: no redesigned behavior specified, treated as a no-op.
            }
        }
    }
}
