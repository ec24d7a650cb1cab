use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ISA 1976 standard atmosphere, lower layers (sea level to 20 km)
// ---------------------------------------------------------------------------

const G0: f64 = 9.80665;          // barometric reference gravity, m/s^2
const R_UNIVERSAL: f64 = 8.314_462_618; // J/(mol·K)
const R_AIR: f64 = 287.052_87;    // specific gas constant for dry air, J/(kg·K)

const T0: f64 = 288.15;           // sea-level temperature, K
const P0: f64 = 101_325.0;        // sea-level pressure, Pa
const LAPSE: f64 = -0.0065;       // troposphere lapse rate, K/m

const TROPOPAUSE: f64 = 11_000.0; // m
const CEILING: f64 = 20_000.0;    // m, top of the isothermal layer
const T_TROPOPAUSE: f64 = 216.65; // K
const P_TROPOPAUSE: f64 = 22_632.1; // Pa

/// Ambient air properties at one altitude.
#[derive(Debug, Clone, Copy)]
pub struct Atmo {
    pub density: f64,     // kg/m^3
    pub pressure: f64,    // Pa
    pub temperature: f64, // K
}

/// Standard atmosphere at `altitude_m`.
///
/// Airships cruise in the troposphere, so only the first two layers are
/// modelled. Altitudes are clamped to [0, 20 km].
pub fn isa(altitude_m: f64) -> Atmo {
    let h = altitude_m.clamp(0.0, CEILING);

    let (temperature, pressure) = if h < TROPOPAUSE {
        let t = T0 + LAPSE * h;
        (t, P0 * (t / T0).powf(-G0 / (LAPSE * R_AIR)))
    } else {
        let p = P_TROPOPAUSE * ((-G0 / (R_AIR * T_TROPOPAUSE)) * (h - TROPOPAUSE)).exp();
        (T_TROPOPAUSE, p)
    };

    Atmo {
        density: pressure / (R_AIR * temperature),
        pressure,
        temperature,
    }
}

// ---------------------------------------------------------------------------
// Lifting gas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftingGas {
    Helium,
    Hydrogen,
}

impl LiftingGas {
    /// Molar mass, kg/mol.
    pub fn molar_mass(self) -> f64 {
        match self {
            LiftingGas::Helium => 4.002_602e-3,
            LiftingGas::Hydrogen => 2.015_88e-3,
        }
    }

    /// Density at ambient pressure and temperature (ideal gas, no superheat).
    pub fn density(self, atm: &Atmo) -> f64 {
        atm.pressure * self.molar_mass() / (R_UNIVERSAL * atm.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_standard_values() {
        let a = isa(0.0);
        assert!((a.temperature - 288.15).abs() < 0.01);
        assert!((a.pressure - 101_325.0).abs() < 1.0);
        assert!((a.density - 1.225).abs() < 0.001);
    }

    #[test]
    fn cruise_altitude_matches_design_density() {
        // 3 km is the design altitude of the presets (rho_air = 0.91)
        let a = isa(3_000.0);
        assert!((a.density - 0.909).abs() < 0.002, "rho = {}", a.density);
    }

    #[test]
    fn tropopause_is_continuous() {
        let below = isa(TROPOPAUSE - 0.01);
        let above = isa(TROPOPAUSE + 0.01);
        assert!((below.pressure - above.pressure).abs() < 5.0);
        assert!((below.temperature - above.temperature).abs() < 0.01);
    }

    #[test]
    fn clamps_outside_model_range() {
        assert_eq!(isa(-500.0).pressure, isa(0.0).pressure);
        assert_eq!(isa(35_000.0).pressure, isa(CEILING).pressure);
    }

    #[test]
    fn helium_is_about_one_seventh_of_air() {
        let a = isa(0.0);
        let ratio = LiftingGas::Helium.density(&a) / a.density;
        assert!((ratio - 0.138).abs() < 0.002, "ratio = {}", ratio);
        assert!(LiftingGas::Hydrogen.density(&a) < LiftingGas::Helium.density(&a));
    }
}
