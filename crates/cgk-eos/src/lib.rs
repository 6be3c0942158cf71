//! cgk-eos: temperature of a partially-ionized gas from pressure and density.
//!
//! Provides:
//! - A log-uniform lookup table of T1 = p/ρ·unitT against temperature
//! - O(1) bracketing-interval location on that table
//! - Inversion with neutral / fully-ionized asymptotes at the extremes
//! - Pressure-density adapter (scalar, typed SI, and parallel batch)
//! - Physical constants configuration (mumin, mumax, unitT)
//! - Species label resolution for chemistry networks
//!
//! # Example
//!
//! ```
//! use cgk_eos::{IonizedGasEos, PhysicalConstants};
//!
//! let eos = IonizedGasEos::new(PhysicalConstants::reference());
//! let t = eos.temperature_from_pressure_density(2.0e4, 1.0).unwrap();
//! assert!(t > 0.0);
//! ```

pub mod constants;
pub mod eos;
pub mod error;
pub mod inverter;
pub mod locator;
pub mod species;
pub mod table;
mod table_data;

// Re-exports for ergonomics
pub use constants::PhysicalConstants;
pub use eos::IonizedGasEos;
pub use error::{EosError, EosResult};
pub use inverter::{IONIZED_LIMIT_K, NEUTRAL_LIMIT_K, Regime, classify, temperature_from_t1};
pub use locator::LogGrid;
pub use species::{SpeciesError, find_index};
pub use table::{LookupTable, TableError, TableNode};
