// synthgen-io - CSV export
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Writes a [`Table`] to CSV: first column `timestamp` in ISO-8601, one
//! column per metric key using its fully qualified name as the header.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use synthgen_core::Table;

use crate::error::Result;

pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(table, file)
}

pub fn write_csv_to(table: &Table, writer: impl Write) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["timestamp".to_string()];
    header.extend(table.column_keys().map(|k| k.to_string()));
    csv_writer.write_record(&header)?;

    for row in 0..table.num_rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(format_timestamp(table.timestamps[row]));
        for key in table.column_keys() {
            let value = table.columns[key][row];
            record.push(format!("{value}"));
        }
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn format_timestamp(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| ms.to_string())
}
