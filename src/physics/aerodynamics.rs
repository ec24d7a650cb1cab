use serde::{Deserialize, Serialize};

use super::geometry;

/// Reference area convention for the hull drag coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragModel {
    /// Volumetric reference area `V^(2/3)`, the usual airship convention.
    VolumeBased,
    /// Frontal disc `pi*(D/2)^2`.
    #[default]
    FrontalArea,
}

/// Drag reference area for the chosen convention, m^2.
pub fn reference_area(model: DragModel, diameter: f64, volume: f64) -> f64 {
    match model {
        DragModel::VolumeBased => volume.powf(2.0 / 3.0),
        DragModel::FrontalArea => geometry::frontal_area(diameter),
    }
}

/// Dynamic pressure `q = 0.5*rho*u^2`, Pa.
pub fn dynamic_pressure(density: f64, speed: f64) -> f64 {
    0.5 * density * speed * speed
}

/// Steady-cruise hull drag magnitude, N.
pub fn drag_force(density: f64, speed: f64, cd: f64, area: f64) -> f64 {
    dynamic_pressure(density, speed) * area * cd
}

/// Shaft power needed to hold `speed` against `drag` (thrust = drag), W.
pub fn propulsive_power(drag: f64, speed: f64) -> f64 {
    drag * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::geometry::VolumeModel;

    #[test]
    fn no_drag_at_rest() {
        let area = reference_area(DragModel::FrontalArea, 8.0, 0.0);
        assert_eq!(drag_force(0.91, 0.0, 0.04, area), 0.0);
    }

    #[test]
    fn frontal_drag_reference() {
        let area = reference_area(DragModel::FrontalArea, 8.0, 0.0);
        let drag = drag_force(0.91, 15.0, 0.04, area);
        assert!((drag - 205.837_150_663_203).abs() < 1e-9);
        assert!((propulsive_power(drag, 15.0) - 3087.557_259_948_049).abs() < 1e-8);
    }

    #[test]
    fn volume_based_area_uses_two_thirds_power() {
        let v = geometry::volume(3.0, 4.0, VolumeModel::Simplified);
        let area = reference_area(DragModel::VolumeBased, 3.0, v);
        assert!((area.powf(1.5) - v).abs() < 1e-9);
    }

    #[test]
    fn drag_scales_with_speed_squared() {
        let d1 = drag_force(1.0, 10.0, 0.05, 2.0);
        let d2 = drag_force(1.0, 20.0, 0.05, 2.0);
        assert!((d2 / d1 - 4.0).abs() < 1e-12);
    }
}
