pub mod atmosphere;
pub mod aerodynamics;
pub mod geometry;

/// Gravitational acceleration used for weight and buoyancy, m/s^2.
pub const G: f64 = 9.81;

/// Hours in one day/night cycle.
pub const HOURS_PER_DAY: f64 = 24.0;
