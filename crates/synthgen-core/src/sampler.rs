// synthgen-core - Distribution sampling
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Draws the base sample series for one metric from its configured
//! distribution, deriving distribution parameters from `mean`/`std`/`params`
//! by moment matching rather than asking the config for shape/scale
//! directly.

use rand::distributions::Uniform;
use rand::Rng;
use rand_distr::{Beta, Distribution, Exp, Gamma, LogNormal, Normal, Poisson};

use crate::error::{GenerateError, Result};
use crate::model::{DistributionKind, DistributionSpec};

/// Draws `n` samples for `spec`, with no mean adjustment.
pub fn sample(spec: &DistributionSpec, n: usize, rng: &mut impl Rng) -> Result<Vec<f64>> {
    sample_adjusted(spec, n, 1.0, rng)
}

/// Draws `n` samples for `spec` with `mean` scaled by `adjustment_factor`
/// first. Dependency propagation (§4.2) uses this to shift a dependent
/// metric's mean before sampling, without mutating the config.
pub fn sample_adjusted(
    spec: &DistributionSpec,
    n: usize,
    adjustment_factor: f64,
    rng: &mut impl Rng,
) -> Result<Vec<f64>> {
    let mean = spec.mean * adjustment_factor;
    let mut values = match spec.kind {
        DistributionKind::Normal | DistributionKind::Unknown => {
            let std = spec.std.unwrap_or_else(|| 0.1 * mean.abs()).max(1e-9);
            let dist = Normal::new(mean, std).map_err(invalid("normal", spec))?;
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Poisson => {
            if mean <= 0.0 {
                return Err(invalid_err("poisson", spec, "mean must be positive"));
            }
            let dist = Poisson::new(mean).map_err(invalid("poisson", spec))?;
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Gamma => {
            let cv = spec.params.get("cv").copied().unwrap_or(0.3);
            if cv <= 0.0 {
                return Err(invalid_err("gamma", spec, "cv must be positive"));
            }
            let shape = 1.0 / (cv * cv);
            let scale = mean / shape;
            let dist = Gamma::new(shape, scale).map_err(invalid("gamma", spec))?;
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::LogNormal => {
            let std = spec.std.unwrap_or(mean * 0.3).max(1e-9);
            let variance = std * std;
            let mu_ln = (mean * mean / (mean * mean + variance).sqrt()).ln();
            let sigma_ln = (1.0 + variance / (mean * mean)).ln().sqrt();
            let dist = LogNormal::new(mu_ln, sigma_ln).map_err(invalid("lognormal", spec))?;
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Beta => {
            let rescale = spec.max_value.map(|m| m > 1.0).unwrap_or(false);
            let unit_mean = if rescale { (mean / 100.0).clamp(0.01, 0.99) } else { mean.clamp(0.01, 0.99) };
            let std = (spec.std.unwrap_or(0.15) / if rescale { 100.0 } else { 1.0 }).max(1e-6);
            let variance = (std * std).min(unit_mean * (1.0 - unit_mean) * 0.99);
            let common = unit_mean * (1.0 - unit_mean) / variance - 1.0;
            let alpha = (unit_mean * common).max(0.1);
            let beta = ((1.0 - unit_mean) * common).max(0.1);
            let dist = Beta::new(alpha, beta).map_err(invalid("beta", spec))?;
            let scale = if rescale { 100.0 } else { 1.0 };
            (0..n).map(|_| dist.sample(rng) * scale).collect()
        }
        DistributionKind::Exponential => {
            let rate = spec.params.get("rate").copied().unwrap_or(1.0 / mean.max(1e-9));
            if rate <= 0.0 {
                return Err(invalid_err("exponential", spec, "rate must be positive"));
            }
            let dist = Exp::new(rate).map_err(invalid("exponential", spec))?;
            (0..n).map(|_| dist.sample(rng)).collect()
        }
        DistributionKind::Uniform => {
            let lo = spec.min_value.unwrap_or(0.5 * mean);
            let hi = spec.max_value.unwrap_or(1.5 * mean);
            let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
            let dist = Uniform::new_inclusive(lo, hi);
            (0..n).map(|_| dist.sample(rng)).collect::<Vec<f64>>()
        }
    };

    if let Some(min) = spec.min_value {
        for v in values.iter_mut() {
            *v = v.max(min);
        }
    }
    if let Some(max) = spec.max_value {
        for v in values.iter_mut() {
            *v = v.min(max);
        }
    }
    Ok(values)
}

fn invalid_err(kind: &str, spec: &DistributionSpec, reason: &str) -> GenerateError {
    GenerateError::InvalidDistributionParameter {
        key: format!("{kind}(mean={})", spec.mean),
        reason: reason.to_string(),
    }
}

fn invalid<E: std::fmt::Display>(
    kind: &'static str,
    spec: &DistributionSpec,
) -> impl FnOnce(E) -> GenerateError + '_ {
    move |e| invalid_err(kind, spec, &e.to_string())
}
