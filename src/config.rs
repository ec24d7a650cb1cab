use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SizingError, SizingResult};
use crate::physics::atmosphere::{self, LiftingGas};
use crate::sizing::{EquilibriumSolver, SizingModel, SweepConfig};
use crate::vehicle::{BlimpParams, TechnologyCatalog, TechnologySelection};

/// A complete design study: parameters, technologies and sweep.
/// Maps 1:1 to the JSON files under `configs/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    pub name: String,
    pub params: BlimpParams,
    /// When present, air and lifting-gas densities come from the standard
    /// atmosphere instead of `params`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient: Option<StandardAmbient>,
    pub selection: TechnologySelection,
    pub catalog: TechnologyCatalog,
    #[serde(default)]
    pub sweep: SweepConfig,
}

/// Cruise altitude and lifting gas for density lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardAmbient {
    pub altitude_m: f64,
    pub gas: LiftingGas,
}

impl DesignConfig {
    pub fn from_file(path: impl AsRef<Path>) -> SizingResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> SizingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SizingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parameters with ambient densities applied.
    pub fn resolved_params(&self) -> SizingResult<BlimpParams> {
        let mut params = self.params.clone();
        if let Some(ambient) = self.ambient {
            if !ambient.altitude_m.is_finite() {
                return Err(SizingError::InvalidParameter {
                    name: "ambient.altitude_m",
                    value: ambient.altitude_m,
                    reason: "must be finite",
                });
            }
            let atm = atmosphere::isa(ambient.altitude_m);
            params.air_density = atm.density;
            params.gas_density = ambient.gas.density(&atm);
        }
        Ok(params)
    }

    pub fn model(&self) -> SizingResult<SizingModel> {
        SizingModel::from_catalog(self.resolved_params()?, &self.catalog, &self.selection)
    }

    pub fn solver(&self) -> EquilibriumSolver {
        EquilibriumSolver::new(self.sweep.clone())
    }
}

// ---------------------------------------------------------------------------
// Preset designs
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;
    use crate::physics::aerodynamics::DragModel;
    use crate::physics::geometry::VolumeModel;
    use crate::vehicle::{
        BatterySpec, EnvelopeMaterial, FormulaVariant, MotorSpec, PanelBudget, PanelSpec,
    };

    /// Technologies used by the preset designs.
    pub fn catalog() -> TechnologyCatalog {
        TechnologyCatalog::default()
            .with_motor("PMSM", MotorSpec::PowerDensity { w_per_kg: 3000.0 })
            .with_motor("BLDC", MotorSpec::PowerDensity { w_per_kg: 2000.0 })
            .with_motor("twin-4.8kg", MotorSpec::Fixed { unit_mass_kg: 4.8, count: 2 })
            .with_panel("Renogy", PanelSpec::Continuous { w_per_kg: 200.0 / 4.9 })
            .with_panel("mono-430W", PanelSpec::Discrete { unit_power_w: 430.0, unit_mass_kg: 7.2 })
            .with_battery("LFP", BatterySpec::Continuous { wh_per_kg: 150.0 })
            .with_battery("Li3", BatterySpec::Continuous { wh_per_kg: 230.0 })
            .with_battery(
                "LFP-5120Wh",
                BatterySpec::Discrete { unit_capacity_wh: 5120.0, unit_mass_kg: 50.0 },
            )
            .with_envelope("PET", EnvelopeMaterial { kg_per_m2: 0.06 })
            .with_envelope("PU-200", EnvelopeMaterial { kg_per_m2: 0.2 })
    }

    /// Uncrewed first iteration: density-sized components, volumetric drag.
    pub fn mk1() -> DesignConfig {
        let params = BlimpParams {
            fineness_ratio: 4.0,
            speed: 10.0,
            air_density: 0.91,
            gas_density: 0.15,
            drag_coefficient: 0.05,
            sunlight_hours: 8.0,
            base_power: 40.0,
            extra_power: 0.0,
            base_mass: 1.0,
            avionics_mass: 10.0,
            cabin_mass: 0.0,
            variant: FormulaVariant {
                drag: DragModel::VolumeBased,
                volume: VolumeModel::Simplified,
                panel_budget: PanelBudget::PropulsionOnly,
            },
        };

        DesignConfig {
            name: "Mk1 survey blimp".into(),
            params,
            ambient: None,
            selection: TechnologySelection::new("PMSM", "Renogy", "LFP", "PET"),
            catalog: catalog(),
            // 0..8 m in 800 steps, without the degenerate D = 0 sample
            sweep: SweepConfig { d_min: 8.0 / 799.0, d_max: 8.0, samples: 799, tolerance: 5.0 },
        }
    }

    /// Crewed second iteration: catalogue panels and battery packs, cabin.
    pub fn mk2() -> DesignConfig {
        DesignConfig {
            name: "Mk2 crewed blimp".into(),
            params: BlimpParams::builder().build(),
            ambient: None,
            selection: TechnologySelection::new("twin-4.8kg", "mono-430W", "LFP-5120Wh", "PU-200"),
            catalog: catalog(),
            sweep: SweepConfig::default(),
        }
    }
}
