// synthgen-core - Time axis construction
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Builds the shared row index every column is sampled against.

use crate::error::{GenerateError, Result};
use crate::model::TimeWindow;

/// Builds `floor((end - start) / granularity) + 1` timestamps, spaced
/// `granularity_minutes` apart, starting at `start_ms` and not exceeding
/// `end_ms`.
pub fn build(window: &TimeWindow) -> Result<Vec<i64>> {
    if window.granularity_minutes == 0 {
        return Err(GenerateError::NonPositiveGranularity(0));
    }
    if window.end_ms <= window.start_ms {
        return Err(GenerateError::InvalidTimeWindow {
            start_ms: window.start_ms,
            end_ms: window.end_ms,
        });
    }

    let step_ms = window.granularity_minutes as i64 * 60_000;
    let mut timestamps = Vec::new();
    let mut t = window.start_ms;
    while t <= window.end_ms {
        timestamps.push(t);
        t += step_ms;
    }
    Ok(timestamps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_day() {
        let w = TimeWindow {
            start_ms: 0,
            end_ms: 23 * 3_600_000,
            granularity_minutes: 60,
        };
        let ts = build(&w).unwrap();
        assert_eq!(ts.len(), 24);
        assert_eq!(ts[0], 0);
        assert_eq!(*ts.last().unwrap(), 23 * 3_600_000);
    }

    #[test]
    fn rejects_zero_granularity() {
        let w = TimeWindow {
            start_ms: 0,
            end_ms: 1000,
            granularity_minutes: 0,
        };
        assert!(matches!(
            build(&w),
            Err(GenerateError::NonPositiveGranularity(0))
        ));
    }

    #[test]
    fn rejects_backwards_window() {
        let w = TimeWindow {
            start_ms: 1000,
            end_ms: 500,
            granularity_minutes: 5,
        };
        assert!(matches!(build(&w), Err(GenerateError::InvalidTimeWindow { .. })));
    }

    #[test]
    fn partial_last_step_is_dropped() {
        let ts = build(&TimeWindow {
            start_ms: 0,
            end_ms: 2 * 60_000 + 30_000,
            granularity_minutes: 1,
        })
        .unwrap();
        assert_eq!(ts, vec![0, 60_000, 120_000]);
    }
}
