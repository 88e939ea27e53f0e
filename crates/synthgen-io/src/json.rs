// synthgen-io - JSON export
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Writes a [`Table`] as a JSON array of row objects, each keyed by
//! `timestamp` (ISO-8601) plus one entry per metric key.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use synthgen_core::Table;

use crate::error::Result;

pub fn write_json(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let rows = to_rows(table);
    let json = serde_json::to_string_pretty(&rows)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn to_rows(table: &Table) -> Vec<Value> {
    (0..table.num_rows())
        .map(|row| {
            let mut obj = Map::new();
            let ts = DateTime::<Utc>::from_timestamp_millis(table.timestamps[row])
                .map(|dt| dt.to_rfc3339())
                .unwrap_or_else(|| table.timestamps[row].to_string());
            obj.insert("timestamp".to_string(), Value::String(ts));
            for key in table.column_keys() {
                let value = table.columns[key][row];
                obj.insert(
                    key.to_string(),
                    serde_json::Number::from_f64(value)
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                );
            }
            Value::Object(obj)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn produces_one_object_per_row() {
        let mut columns = IndexMap::new();
        columns.insert("e1_temp".to_string(), vec![1.5, 2.5]);
        let table = Table {
            timestamps: vec![0, 60_000],
            columns,
        };
        let rows = to_rows(&table);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["e1_temp"], 1.5);
        assert_eq!(rows[1]["e1_temp"], 2.5);
        assert!(rows[0]["timestamp"].is_string());
    }

    #[test]
    fn nan_values_serialize_as_null() {
        let mut columns = IndexMap::new();
        columns.insert("x".to_string(), vec![f64::NAN]);
        let table = Table {
            timestamps: vec![0],
            columns,
        };
        let rows = to_rows(&table);
        assert!(rows[0]["x"].is_null());
    }
}
