// synthgen-core - Synthetic time-series generation pipeline
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! # synthgen-core
//!
//! Deterministic, seeded generation of correlated synthetic time-series
//! data for any number of entities and metrics, with:
//!
//! - **Distribution sampling**: Normal, Poisson, Gamma, LogNormal, Beta,
//!   Exponential and Uniform, parameterized by mean/std rather than raw
//!   shape parameters.
//! - **Correlation coupling**: a Gaussian copula nudges independently
//!   sampled columns toward a target correlation matrix while preserving
//!   each column's own marginal distribution exactly.
//! - **Seasonality, ARMA smoothing, change points and anomalies**, applied
//!   in that order on top of the base samples.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use synthgen_core::model::{DistributionKind, DistributionSpec, Entity, GeneratorConfig, Metric, TimeWindow};
//! use synthgen_core::generator::generate;
//!
//! let config = GeneratorConfig {
//!     seed: 42,
//!     time_window: TimeWindow { start_ms: 0, end_ms: 3_600_000, granularity_minutes: 5 },
//!     entities: vec![Entity {
//!         entity_id: "site-1".to_string(),
//!         entity_type: "generic".to_string(),
//!         capacity: None,
//!         metadata: Default::default(),
//!         metrics: vec![Metric {
//!             name: "temperature".to_string(),
//!             display_name: "Temperature".to_string(),
//!             unit: "C".to_string(),
//!             category: "environment".to_string(),
//!             distribution: DistributionSpec::new(DistributionKind::Normal, 20.0).with_std(2.0),
//!             dependencies: vec![],
//!             constraints: Default::default(),
//!         }],
//!     }],
//!     correlations: vec![],
//!     dependencies: vec![],
//!     seasonality: None,
//!     arma: None,
//!     change_points: vec![],
//!     anomalies: vec![],
//! };
//!
//! let result = generate(&config).unwrap();
//! assert_eq!(result.table.num_columns(), 1);
//! ```

pub mod anomaly;
pub mod arma;
pub mod changepoint;
pub mod correlation;
pub mod error;
pub mod generator;
pub mod model;
pub mod sampler;
pub mod seasonality;
pub mod table;
pub mod time_axis;
mod window;

pub use error::{GenerateError, Result, Warning};
pub use generator::{generate, validate, GenerationResult};
pub use table::Table;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
