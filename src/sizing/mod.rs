pub mod model;
pub mod solver;

pub use model::{DerivedQuantities, SizingModel};
pub use solver::{CurvePoint, EquilibriumResult, EquilibriumSolver, SweepConfig};
