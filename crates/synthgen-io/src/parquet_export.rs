// synthgen-io - Parquet export
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Writes a [`Table`] to Parquet via Arrow: a `timestamp` column
//! (milliseconds since epoch) plus one `Float64` column per metric key.
//! Gated behind the `parquet-export` feature since it pulls in the arrow
//! and parquet crates.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use synthgen_core::Table;

use crate::error::Result;

pub fn write_parquet(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let mut fields = vec![Field::new("timestamp", DataType::Int64, false)];
    let mut columns: Vec<Arc<dyn arrow::array::Array>> =
        vec![Arc::new(Int64Array::from(table.timestamps.clone()))];

    for key in table.column_keys() {
        fields.push(Field::new(key, DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from(table.columns[key].clone())));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let file = File::create(path)?;
    let properties = WriterProperties::builder().build();
    let mut writer = ArrowWriter::try_new(file, schema, Some(properties))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn writes_a_readable_file() {
        let mut columns = IndexMap::new();
        columns.insert("e1_temp".to_string(), vec![1.0, 2.0, 3.0]);
        let table = Table {
            timestamps: vec![0, 60_000, 120_000],
            columns,
        };
        let file = tempfile::NamedTempFile::new().unwrap();
        write_parquet(&table, file.path()).unwrap();
        assert!(file.path().metadata().unwrap().len() > 0);
    }
}
