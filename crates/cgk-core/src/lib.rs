//! cgk-core: shared foundation for the ionized-gas equation of state.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::CoreError;
pub use numeric::*;
pub use units::*;
