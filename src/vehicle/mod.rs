pub mod blimp;
pub mod technology;

pub use blimp::{BlimpParams, BlimpParamsBuilder, FormulaVariant, PanelBudget};
pub use technology::{
    BatterySpec, EnvelopeMaterial, MotorSpec, PanelSpec, Technology, TechnologyCatalog,
    TechnologySelection, UnitSizing,
};
