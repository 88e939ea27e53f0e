// synthgen-core - Output table
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! The columnar result of a generation run.

use indexmap::IndexMap;

/// A generated dataset: one timestamp axis shared by every column, plus one
/// `f64` column per metric key. Column order is insertion order, which
/// [`crate::generator::generate`] sets to entity/metric declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Unix epoch milliseconds, one per row.
    pub timestamps: Vec<i64>,
    pub columns: IndexMap<String, Vec<f64>>,
}

impl Table {
    pub fn new(timestamps: Vec<i64>) -> Self {
        Self {
            timestamps,
            columns: IndexMap::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.timestamps.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, key: &str) -> Option<&[f64]> {
        self.columns.get(key).map(|v| v.as_slice())
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(|s| s.as_str())
    }
}
