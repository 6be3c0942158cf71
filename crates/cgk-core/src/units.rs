// cgk-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure over density in SI, i.e. a specific energy in J/kg = m²/s².
#[inline]
pub fn specific_energy_si(p: Pressure, rho: Density) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::pressure::pascal;
    p.get::<pascal>() / rho.get::<kilogram_per_cubic_meter>()
}

pub mod constants {
    /// Hydrogen atom mass [kg]
    pub const M_H_KG: f64 = 1.673_534_0e-27;

    /// Boltzmann constant [J/K]
    pub const K_B_J_PER_K: f64 = 1.380_649e-23;

    /// Factor turning an SI pressure/density ratio [m²/s²] into T1 [K].
    #[inline]
    pub fn t1_factor_si() -> f64 {
        M_H_KG / K_B_J_PER_K
    }
}
