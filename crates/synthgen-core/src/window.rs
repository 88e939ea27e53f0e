// synthgen-core - Shared index-window helpers
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Small helpers shared by the change-point and anomaly passes, which both
//! need to turn a `(start_time_ms, duration_ms)` pair into a row-index range
//! and ramp a value across it.

/// Maps a wall-clock window onto `[start_idx, end_idx)` row indices.
///
/// `start_idx` is the first row at or after `start_time_ms`. `end_idx` is
/// the first row at or after `start_time_ms + duration_ms`, or the table
/// length if the window runs past the end of the series. Returns `None`
/// if `start_time_ms` is after every timestamp (the window never starts).
pub fn locate_window(
    timestamps: &[i64],
    start_time_ms: i64,
    duration_ms: i64,
) -> Option<(usize, usize)> {
    let start_idx = timestamps.iter().position(|&t| t >= start_time_ms)?;
    let end_time_ms = start_time_ms + duration_ms;
    let end_idx = timestamps
        .iter()
        .position(|&t| t >= end_time_ms)
        .unwrap_or(timestamps.len());
    Some((start_idx, end_idx))
}

/// `n` evenly spaced points from `start` to `end` inclusive, matching
/// `numpy.linspace(start, end, n)`: step is `(end - start) / (n - 1)`, and a
/// single-point request returns just `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|k| start + step * k as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_window_basic() {
        let ts: Vec<i64> = (0..10).map(|i| i * 1000).collect();
        let (s, e) = locate_window(&ts, 2000, 3000).unwrap();
        assert_eq!(s, 2);
        assert_eq!(e, 5);
    }

    #[test]
    fn locate_window_runs_past_end() {
        let ts: Vec<i64> = (0..5).map(|i| i * 1000).collect();
        let (s, e) = locate_window(&ts, 3000, 10_000).unwrap();
        assert_eq!(s, 3);
        assert_eq!(e, 5);
    }

    #[test]
    fn locate_window_never_starts() {
        let ts: Vec<i64> = (0..5).map(|i| i * 1000).collect();
        assert!(locate_window(&ts, 100_000, 1000).is_none());
    }

    #[test]
    fn linspace_matches_numpy_endpoints() {
        let v = linspace(0.0, 0.2, 10);
        assert_eq!(v.len(), 10);
        assert!((v[0] - 0.0).abs() < 1e-12);
        assert!((v[9] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn linspace_single_point() {
        assert_eq!(linspace(1.0, 5.0, 1), vec![1.0]);
    }
}
