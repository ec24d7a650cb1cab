use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Knud Thomsen exponent for the ellipsoid surface approximation.
pub const THOMSEN_P: f64 = 1.6075;

// ---------------------------------------------------------------------------
// Envelope volume formulas
// ---------------------------------------------------------------------------

/// Envelope volume formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeModel {
    /// `2*pi*D^3/3`, independent of fineness ratio.
    Simplified,
    /// Prolate ellipsoid `(4/3)*pi*(D/2)^2*(L/2)` with `L = D*k`.
    #[default]
    Ellipsoid,
}

// ---------------------------------------------------------------------------
// Ellipsoid geometry
// ---------------------------------------------------------------------------

/// Semi-axes `[a, b, c]` of the envelope, m. `a = b = D/2`, `c = a*k`.
pub fn semi_axes(diameter: f64, fineness_ratio: f64) -> Vector3<f64> {
    let a = diameter / 2.0;
    Vector3::new(a, a, a * fineness_ratio)
}

/// Envelope length, m.
pub fn length(diameter: f64, fineness_ratio: f64) -> f64 {
    diameter * fineness_ratio
}

/// Ellipsoid surface area (Knud Thomsen approximation, ~1% max error), m^2.
pub fn surface_area(diameter: f64, fineness_ratio: f64) -> f64 {
    let s = semi_axes(diameter, fineness_ratio).map(|axis| axis.powf(THOMSEN_P));
    let mean = (s.x * s.y + s.x * s.z + s.y * s.z) / 3.0;
    4.0 * PI * mean.powf(1.0 / THOMSEN_P)
}

/// Envelope volume, m^3.
pub fn volume(diameter: f64, fineness_ratio: f64, model: VolumeModel) -> f64 {
    match model {
        VolumeModel::Simplified => 2.0 * PI * diameter.powi(3) / 3.0,
        VolumeModel::Ellipsoid => {
            let r = diameter / 2.0;
            4.0 / 3.0 * PI * r.powi(2) * (length(diameter, fineness_ratio) / 2.0)
        }
    }
}

/// Circular cross-section at the widest point, m^2.
pub fn frontal_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_area_is_exact() {
        // k = 1 collapses the approximation to 4*pi*r^2
        let area = surface_area(2.0, 1.0);
        assert!((area - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn prolate_area_close_to_closed_form() {
        // a = 1, c = 4: exact prolate spheroid area
        let (a, c) = (1.0_f64, 4.0_f64);
        let e = (1.0 - a * a / (c * c)).sqrt();
        let exact = 2.0 * PI * a * a * (1.0 + c / (a * e) * e.asin());
        let approx = surface_area(2.0, 4.0);
        assert!((approx - exact).abs() / exact < 0.012, "{} vs {}", approx, exact);
    }

    #[test]
    fn ellipsoid_volume_reference() {
        let v = volume(8.0, 5.25, VolumeModel::Ellipsoid);
        assert!((v - 1407.433_508_808_227).abs() < 1e-9);
    }

    #[test]
    fn simplified_volume_ignores_fineness() {
        let a = volume(3.0, 2.0, VolumeModel::Simplified);
        let b = volume(3.0, 6.0, VolumeModel::Simplified);
        assert_eq!(a, b);
        assert!((a - 18.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn semi_axes_follow_fineness() {
        let axes = semi_axes(8.0, 5.25);
        assert_eq!(axes, Vector3::new(4.0, 4.0, 21.0));
        assert_eq!(length(8.0, 5.25), 42.0);
    }

    #[test]
    fn frontal_area_is_disc() {
        assert!((frontal_area(2.0) - PI).abs() < 1e-12);
    }
}
