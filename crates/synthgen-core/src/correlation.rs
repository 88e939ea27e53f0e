// synthgen-core - Correlation coupling
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Couples independently sampled columns toward a target correlation
//! structure with a Gaussian copula: rank-transform each column to a
//! uniform score, push through the standard normal quantile function,
//! apply a repaired correlation matrix as a linear map, push back through
//! the normal CDF, and quantile-map onto each column's own empirical
//! distribution. Marginals are preserved exactly; only the joint structure
//! changes.

use indexmap::IndexMap;
use nalgebra::{Cholesky, DMatrix, SymmetricEigen};
use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::Warning;
use crate::model::CorrelationEdge;

const EIGENVALUE_FLOOR: f64 = 1e-10;

/// Mutates `columns` in place to approximate the pairwise correlations in
/// `edges`. Edges referencing a key not present in `columns` are dropped
/// with a [`Warning`] rather than aborting the run.
pub fn apply(columns: &mut IndexMap<String, Vec<f64>>, edges: &[CorrelationEdge], warnings: &mut Vec<Warning>) {
    let keys: Vec<String> = columns.keys().cloned().collect();
    let m = keys.len();
    if m < 2 {
        return;
    }
    let n = columns.values().next().map(|c| c.len()).unwrap_or(0);
    if n == 0 {
        return;
    }
    let index_of = |k: &str| keys.iter().position(|x| x == k);

    let mut target = DMatrix::<f64>::identity(m, m);
    for edge in edges {
        match (index_of(&edge.source_key), index_of(&edge.target_key)) {
            (Some(i), Some(j)) if i != j => {
                target[(i, j)] = edge.coefficient;
                target[(j, i)] = edge.coefficient;
            }
            _ => warnings.push(Warning::UnknownCorrelationKey {
                source: edge.source_key.clone(),
                target: edge.target_key.clone(),
            }),
        }
    }

    let repaired = nearest_positive_definite(&target);
    let lower = match Cholesky::new(repaired) {
        Some(c) => c.l(),
        None => return, // repair failed to produce a PD matrix; leave columns untouched
    };

    let normal = Normal::new(0.0, 1.0).expect("standard normal is always valid");

    // rank[j][i] = position of row i's value within column j's sort order.
    // sorted[j] holds column j's values in ascending order, so the value at
    // rank r in column j is sorted[j][r].
    let mut sorted: Vec<Vec<f64>> = Vec::with_capacity(m);
    let mut z = DMatrix::<f64>::zeros(n, m);
    for (j, key) in keys.iter().enumerate() {
        let col = &columns[key];
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| col[a].partial_cmp(&col[b]).unwrap_or(std::cmp::Ordering::Equal));
        let mut rank = vec![0usize; n];
        for (r, &orig) in order.iter().enumerate() {
            rank[orig] = r;
        }
        for i in 0..n {
            let u = (rank[i] + 1) as f64 / (n + 1) as f64;
            z[(i, j)] = normal.inverse_cdf(u);
        }
        sorted.push(order.iter().map(|&idx| col[idx]).collect());
    }

    let coupled = z * lower.transpose();

    for (j, key) in keys.iter().enumerate() {
        let col = columns.get_mut(key).unwrap();
        for i in 0..n {
            let u = normal.cdf(coupled[(i, j)]);
            let rank = ((u * n as f64).floor() as isize).clamp(0, n as isize - 1) as usize;
            col[i] = sorted[j][rank];
        }
    }
}

/// Repairs a symmetric-but-possibly-indefinite matrix to the nearest
/// positive semidefinite one by eigenvalue clipping: symmetrize, eigen-
/// decompose, floor negative eigenvalues, reconstruct.
fn nearest_positive_definite(m: &DMatrix<f64>) -> DMatrix<f64> {
    let symmetric = (m + m.transpose()) * 0.5;
    let eigen = SymmetricEigen::new(symmetric);
    let mut eigenvalues = eigen.eigenvalues;
    for v in eigenvalues.iter_mut() {
        if *v < 0.0 {
            *v = EIGENVALUE_FLOOR;
        }
    }
    let v = &eigen.eigenvectors;
    let d = DMatrix::from_diagonal(&eigenvalues);
    v * d * v.transpose()
}
