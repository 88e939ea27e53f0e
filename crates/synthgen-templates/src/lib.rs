// synthgen-templates - Domain presets
// Copyright (c) 2025 David Martin Venti
//
// Dual-licensed under AGPL-3.0 and Commercial License.
// See LICENSE file for details.

//! Ready-made [`synthgen_core::model::GeneratorConfig`] values per domain
//! tag. This is pure data: no generation logic lives here, only a
//! plausible starting configuration a caller can use as-is or tweak.

mod common;

pub mod agriculture;
pub mod energy;
pub mod logistics;
pub mod manufacturing;
pub mod satellite;
pub mod smart_city;

use synthgen_core::model::GeneratorConfig;

/// Domain tag selecting one of the built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Agriculture,
    Satellite,
    Manufacturing,
    SmartCity,
    Logistics,
    Energy,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Agriculture => "agriculture",
            Domain::Satellite => "satellite",
            Domain::Manufacturing => "manufacturing",
            Domain::SmartCity => "smart_city",
            Domain::Logistics => "logistics",
            Domain::Energy => "energy",
        }
    }

    pub fn all() -> [Domain; 6] {
        [
            Domain::Agriculture,
            Domain::Satellite,
            Domain::Manufacturing,
            Domain::SmartCity,
            Domain::Logistics,
            Domain::Energy,
        ]
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "agriculture" => Ok(Domain::Agriculture),
            "satellite" => Ok(Domain::Satellite),
            "manufacturing" => Ok(Domain::Manufacturing),
            "smart_city" => Ok(Domain::SmartCity),
            "logistics" => Ok(Domain::Logistics),
            "energy" => Ok(Domain::Energy),
            other => Err(format!("unknown domain template: {other}")),
        }
    }
}

/// Builds the preset config for `domain` with the given seed.
pub fn build(domain: Domain, seed: u64) -> GeneratorConfig {
    match domain {
        Domain::Agriculture => agriculture::build(seed),
        Domain::Satellite => satellite::build(seed),
        Domain::Manufacturing => manufacturing::build(seed),
        Domain::SmartCity => smart_city::build(seed),
        Domain::Logistics => logistics::build(seed),
        Domain::Energy => energy::build(seed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_domain_builds_a_valid_config() {
        for domain in Domain::all() {
            let config = build(domain, 1);
            assert!(!config.entities.is_empty());
            assert!(synthgen_core::generator::validate(&config).is_ok());
        }
    }

    #[test]
    fn domain_round_trips_through_its_string_name() {
        for domain in Domain::all() {
            let parsed: Domain = domain.as_str().parse().unwrap();
            assert_eq!(parsed, domain);
        }
    }
}
