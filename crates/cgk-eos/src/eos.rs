//! Pressure-density → temperature adapter.
//!
//! This is the entry point simulation code calls once per cell. Inputs are
//! checked before anything reaches the logarithm in the locator, then the
//! work is handed to the inverter.

use cgk_core::numeric::ensure_positive;
use cgk_core::units::{
    Density, Pressure, Temperature, constants::t1_factor_si, k, specific_energy_si,
};
use rayon::prelude::*;

use crate::constants::PhysicalConstants;
use crate::error::{EosError, EosResult};
use crate::inverter::{self, Regime};
use crate::table::LookupTable;

/// Tabulated equation of state for a partially-ionized gas.
///
/// Holds only a shared reference to an immutable table, so it is `Copy` and
/// can be handed to every worker thread without locking.
#[derive(Debug, Clone, Copy)]
pub struct IonizedGasEos {
    constants: PhysicalConstants,
    table: &'static LookupTable,
}

impl IonizedGasEos {
    /// Equation of state over the embedded reference table.
    pub fn new(constants: PhysicalConstants) -> Self {
        Self::with_table(constants, LookupTable::reference())
    }

    pub fn with_table(constants: PhysicalConstants, table: &'static LookupTable) -> Self {
        Self { constants, table }
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn table(&self) -> &'static LookupTable {
        self.table
    }

    /// Branch the inversion takes for `t1` (no input checks).
    pub fn regime(&self, t1: f64) -> Regime {
        inverter::classify(&self.constants, t1)
    }

    /// Temperature [K] from T1.
    pub fn temperature_from_t1(&self, t1: f64) -> EosResult<f64> {
        let t1 = ensure_positive(t1, "T1").map_err(EosError::non_physical)?;
        Ok(inverter::temperature_from_t1(
            self.table,
            &self.constants,
            t1,
        ))
    }

    /// Temperature [K] from pressure and density in code units.
    ///
    /// ```text
    /// T1 = pressure / density · unit_t
    /// ```
    pub fn temperature_from_pressure_density(&self, pressure: f64, density: f64) -> EosResult<f64> {
        let pressure = ensure_positive(pressure, "pressure").map_err(EosError::non_physical)?;
        let density = ensure_positive(density, "density").map_err(EosError::non_physical)?;
        self.temperature_from_t1(pressure / density * self.constants.unit_t)
    }

    /// Temperature from SI pressure and density.
    ///
    /// T1 is built with `m_H / k_B` directly, so `unit_t` does not apply.
    pub fn temperature(&self, pressure: Pressure, density: Density) -> EosResult<Temperature> {
        ensure_positive(pressure.value, "pressure").map_err(EosError::non_physical)?;
        ensure_positive(density.value, "density").map_err(EosError::non_physical)?;
        let t1 = specific_energy_si(pressure, density) * t1_factor_si();
        self.temperature_from_t1(t1).map(k)
    }

    /// Evaluate a batch of cells in parallel, writing temperatures into `out`.
    ///
    /// All three slices must have the same length. The first invalid cell
    /// aborts the batch; `out` is then partially written.
    pub fn temperatures_from_pressure_density(
        &self,
        pressures: &[f64],
        densities: &[f64],
        out: &mut [f64],
    ) -> EosResult<()> {
        let n = pressures.len();
        if densities.len() != n {
            return Err(EosError::LengthMismatch {
                what: "densities",
                expected: n,
                got: densities.len(),
            });
        }
        if out.len() != n {
            return Err(EosError::LengthMismatch {
                what: "output",
                expected: n,
                got: out.len(),
            });
        }

        out.par_iter_mut()
            .zip(pressures.par_iter().zip(densities.par_iter()))
            .enumerate()
            .try_for_each(|(index, (t, (&p, &rho)))| {
                *t = self
                    .temperature_from_pressure_density(p, rho)
                    .map_err(|e| EosError::Cell {
                        index,
                        source: Box::new(e),
                    })?;
                Ok(())
            })
    }
}

impl Default for IonizedGasEos {
    fn default() -> Self {
        Self::new(PhysicalConstants::reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgk_core::units::{kg_per_m3, pa};
    use uom::si::thermodynamic_temperature::kelvin;

    #[test]
    fn eos_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IonizedGasEos>();
    }

    #[test]
    fn pressure_density_delegates_to_t1() {
        let eos = IonizedGasEos::default();
        let direct = eos.temperature_from_t1(5.0e4).unwrap();
        let via_pd = eos.temperature_from_pressure_density(1.0e5, 2.0).unwrap();
        assert_eq!(direct, via_pd);
    }

    #[test]
    fn unit_t_scales_t1() {
        let c = PhysicalConstants::new(0.5, 2.0, 4.0).unwrap();
        let eos = IonizedGasEos::new(c);
        // T1 = 100 / 1 * 4 = 400, neutral branch
        assert_eq!(eos.temperature_from_pressure_density(100.0, 1.0).unwrap(), 800.0);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        let eos = IonizedGasEos::default();
        for (p, rho, what) in [
            (0.0, 1.0, "pressure"),
            (-1.0, 1.0, "pressure"),
            (1.0, 0.0, "density"),
            (1.0, -2.0, "density"),
            (f64::NAN, 1.0, "pressure"),
            (1.0, f64::INFINITY, "density"),
        ] {
            let err = eos.temperature_from_pressure_density(p, rho).unwrap_err();
            match err {
                EosError::NonPhysical { what: w, .. } => assert_eq!(w, what),
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_positive_t1() {
        let eos = IonizedGasEos::default();
        assert!(eos.temperature_from_t1(0.0).is_err());
        assert!(eos.temperature_from_t1(-5.0).is_err());
        assert!(eos.temperature_from_t1(f64::NAN).is_err());
    }

    #[test]
    fn si_entry_point() {
        let eos = IonizedGasEos::default();
        // Neutral atomic hydrogen-like gas at room conditions stays on the neutral branch
        let t = eos.temperature(pa(101_325.0), kg_per_m3(1.2)).unwrap();
        let t1 = 101_325.0 / 1.2 * t1_factor_si();
        assert!((t.get::<kelvin>() - 1.295 * t1).abs() < 1e-9);

        assert!(eos.temperature(pa(-1.0), kg_per_m3(1.0)).is_err());
        assert!(eos.temperature(pa(1.0), kg_per_m3(0.0)).is_err());
    }

    #[test]
    fn batch_matches_scalar() {
        let eos = IonizedGasEos::default();
        let pressures: Vec<f64> = (1..=64).map(|i| 10f64.powf(i as f64 * 0.125)).collect();
        let densities = vec![1.0; pressures.len()];
        let mut out = vec![0.0; pressures.len()];

        eos.temperatures_from_pressure_density(&pressures, &densities, &mut out)
            .unwrap();

        for (i, &p) in pressures.iter().enumerate() {
            assert_eq!(out[i], eos.temperature_from_pressure_density(p, 1.0).unwrap());
        }
    }

    #[test]
    fn batch_reports_length_mismatch() {
        let eos = IonizedGasEos::default();
        let mut out = vec![0.0; 2];
        let err = eos
            .temperatures_from_pressure_density(&[1.0, 2.0], &[1.0], &mut out)
            .unwrap_err();
        assert!(matches!(
            err,
            EosError::LengthMismatch {
                what: "densities",
                expected: 2,
                got: 1
            }
        ));

        let mut short = vec![0.0; 1];
        let err = eos
            .temperatures_from_pressure_density(&[1.0, 2.0], &[1.0, 1.0], &mut short)
            .unwrap_err();
        assert!(matches!(err, EosError::LengthMismatch { what: "output", .. }));
    }

    #[test]
    fn batch_reports_failing_cell() {
        let eos = IonizedGasEos::default();
        let mut out = vec![0.0; 3];
        let err = eos
            .temperatures_from_pressure_density(&[1.0, 2.0, 3.0], &[1.0, 0.0, 1.0], &mut out)
            .unwrap_err();
        match err {
            EosError::Cell { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, EosError::NonPhysical { what: "density", .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
