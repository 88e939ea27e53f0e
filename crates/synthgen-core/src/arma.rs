// synthgen-core - ARMA smoothing
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Applies an AR pass and an MA pass to a single column, in that order.
//! The AR pass blends each point with its own autoregressive prediction at
//! a fixed 0.3/0.7 ratio rather than replacing it outright, which keeps the
//! smoothing gentle regardless of `ar_coef` magnitude.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::model::ArmaSpec;

const AR_BLEND: f64 = 0.3;
const ORIGINAL_BLEND: f64 = 1.0 - AR_BLEND;

/// Smooths `col` in place. `noise_std` in `spec` is interpreted relative to
/// the column's own standard deviation *before* either pass runs; a
/// constant column (std == 0) falls back to treating `noise_std` as an
/// absolute value so MA noise isn't silently dropped.
pub fn apply(col: &mut [f64], spec: &ArmaSpec, rng: &mut impl Rng) {
    let n = col.len();
    let original_std = stddev(col);

    if spec.ar_order > 0 && !spec.ar_coef.is_empty() {
        let p = spec.ar_order.min(spec.ar_coef.len());
        for i in p..n {
            let prediction: f64 = (1..=p).map(|j| spec.ar_coef[j - 1] * col[i - j]).sum();
            col[i] = AR_BLEND * prediction + ORIGINAL_BLEND * col[i];
        }
    }

    if spec.ma_order > 0 && !spec.ma_coef.is_empty() {
        let q = spec.ma_order.min(spec.ma_coef.len());
        let noise_std = if original_std > 0.0 {
            spec.noise_std * original_std
        } else {
            spec.noise_std
        };
        let noise: Vec<f64> = if noise_std > 0.0 {
            let dist = Normal::new(0.0, noise_std).expect("noise_std checked positive above");
            (0..n).map(|_| dist.sample(rng)).collect()
        } else {
            vec![0.0; n]
        };
        for i in q..n {
            let contribution: f64 = (1..=q).map(|j| spec.ma_coef[j - 1] * noise[i - j]).sum();
            col[i] += contribution;
        }
    }
}

fn stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ar_pass_blends_toward_the_prediction() {
        let mut col = vec![10.0, 10.0, 20.0, 10.0, 10.0, 10.0];
        let spec = ArmaSpec {
            ar_order: 1,
            ma_order: 0,
            ar_coef: vec![1.0],
            ma_coef: vec![],
            noise_std: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(1);
        apply(&mut col, &spec, &mut rng);
        // i=2: pred = col[1] (10) -> 0.3*10 + 0.7*20 = 17
        // i=3: pred = col[2] (17, already blended) -> 0.3*17 + 0.7*10 = 12.1
        assert!((col[2] - 17.0).abs() < 1e-9);
        assert!((col[3] - 12.1).abs() < 1e-9);
    }

    #[test]
    fn zero_order_is_a_no_op() {
        let mut col = vec![1.0, 2.0, 3.0, 4.0];
        let before = col.clone();
        let spec = ArmaSpec {
            ar_order: 0,
            ma_order: 0,
            ar_coef: vec![],
            ma_coef: vec![],
            noise_std: 1.0,
        };
        let mut rng = StdRng::seed_from_u64(2);
        apply(&mut col, &spec, &mut rng);
        assert_eq!(col, before);
    }

    #[test]
    fn ma_pass_on_constant_column_still_adds_noise() {
        let mut col = vec![5.0; 20];
        let spec = ArmaSpec {
            ar_order: 0,
            ma_order: 1,
            ar_coef: vec![],
            ma_coef: vec![1.0],
            noise_std: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(3);
        apply(&mut col, &spec, &mut rng);
        assert!(col.iter().any(|&v| (v - 5.0).abs() > 1e-9));
    }
}
