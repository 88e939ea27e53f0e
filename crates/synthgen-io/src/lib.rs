// synthgen-io - Table and metadata serialization
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Serializes a generated [`synthgen_core::Table`] to disk: CSV and JSON
//! unconditionally, Parquet behind the `parquet-export` feature, plus a
//! JSON metadata sidecar describing the run that produced it.

pub mod csv;
pub mod error;
pub mod json;
pub mod metadata;

#[cfg(feature = "parquet-export")]
pub mod parquet_export;

pub use csv::write_csv;
pub use error::{IoError, Result};
pub use json::write_json;
pub use metadata::RunMetadata;

#[cfg(feature = "parquet-export")]
pub use parquet_export::write_parquet;

/// Output table formats a caller can request by name (e.g. from a CLI flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    #[cfg(feature = "parquet-export")]
    Parquet,
}

impl std::str::FromStr for ExportFormat {
    type Err = IoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            #[cfg(feature = "parquet-export")]
            "parquet" => Ok(ExportFormat::Parquet),
            other => Err(IoError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Writes `table` to `path` in `format`.
pub fn write_table(table: &synthgen_core::Table, path: impl AsRef<std::path::Path>, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(table, path),
        ExportFormat::Json => write_json(table, path),
        #[cfg(feature = "parquet-export")]
        ExportFormat::Parquet => write_parquet(table, path),
    }
}
