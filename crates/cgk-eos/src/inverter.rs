//! T1 → temperature inversion.
//!
//! Between the neutral and fully-ionized limits the mean molecular weight
//! follows the tabulated chemistry, so the temperature comes from the lookup
//! table. Past either limit mu is constant and `T = mu * T1` is exact.

use crate::constants::PhysicalConstants;
use crate::table::LookupTable;

/// Below this neutral-limit temperature [K] ionization is negligible.
pub const NEUTRAL_LIMIT_K: f64 = 5.0e3;

/// Above this ionized-limit temperature [K] the gas is fully ionized.
pub const IONIZED_LIMIT_K: f64 = 1.0e7;

/// Which branch of the inversion a T1 value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// `mumax * T1 < NEUTRAL_LIMIT_K`
    Neutral,
    /// Table interpolation.
    Tabulated,
    /// `mumin * T1 > IONIZED_LIMIT_K`
    Ionized,
}

/// Branch [`temperature_from_t1`] takes for `t1` under `constants`.
pub fn classify(constants: &PhysicalConstants, t1: f64) -> Regime {
    if constants.mumax * t1 < NEUTRAL_LIMIT_K {
        Regime::Neutral
    } else if constants.mumin * t1 > IONIZED_LIMIT_K {
        Regime::Ionized
    } else {
        Regime::Tabulated
    }
}

/// Temperature [K] for a given T1.
///
/// `t1` is assumed positive and finite; callers outside this crate go
/// through [`crate::IonizedGasEos`], which checks that.
#[inline]
pub fn temperature_from_t1(table: &LookupTable, constants: &PhysicalConstants, t1: f64) -> f64 {
    let t_neutral = constants.mumax * t1;
    if t_neutral < NEUTRAL_LIMIT_K {
        return t_neutral;
    }
    let t_ionized = constants.mumin * t1;
    if t_ionized > IONIZED_LIMIT_K {
        return t_ionized;
    }
    table.interpolate(t1)
}
