pub mod error;
pub mod physics;
pub mod vehicle;
pub mod sizing;
pub mod config;
pub mod io;

pub use config::{presets, DesignConfig};
pub use error::{SizingError, SizingResult};
pub use sizing::{DerivedQuantities, EquilibriumResult, EquilibriumSolver, SizingModel, SweepConfig};
pub use vehicle::{BlimpParams, FormulaVariant, TechnologyCatalog, TechnologySelection};
