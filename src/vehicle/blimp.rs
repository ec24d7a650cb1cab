use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, SizingError, SizingResult};
use crate::physics::aerodynamics::DragModel;
use crate::physics::geometry::VolumeModel;
use crate::physics::HOURS_PER_DAY;

// ---------------------------------------------------------------------------
// Formula selection
// ---------------------------------------------------------------------------

/// What the daylight panel output has to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelBudget {
    /// Whole electrical load scaled to a full day: `P_total * 24 / t_sun`.
    #[default]
    WholeLoad,
    /// Only propulsion is scaled; hotel loads are added at face value.
    PropulsionOnly,
}

/// Formula strategy for one evaluation. Defaults to frontal-area drag,
/// ellipsoid volume and a whole-load panel budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormulaVariant {
    #[serde(default)]
    pub drag: DragModel,
    #[serde(default)]
    pub volume: VolumeModel,
    #[serde(default)]
    pub panel_budget: PanelBudget,
}

// ---------------------------------------------------------------------------
// Design parameters (everything except the diameter)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlimpParams {
    pub fineness_ratio: f64,   // length / diameter
    pub speed: f64,            // cruise speed, m/s
    pub air_density: f64,      // kg/m^3
    pub gas_density: f64,      // lifting gas, kg/m^3
    pub drag_coefficient: f64,
    pub sunlight_hours: f64,   // h per day
    pub base_power: f64,       // W, always-on load
    #[serde(default)]
    pub extra_power: f64,      // W, payload load
    pub base_mass: f64,        // kg
    pub avionics_mass: f64,    // kg
    #[serde(default)]
    pub cabin_mass: f64,       // kg
    #[serde(default)]
    pub variant: FormulaVariant,
}

impl BlimpParams {
    pub fn builder() -> BlimpParamsBuilder {
        BlimpParamsBuilder::new()
    }

    pub fn validate(&self) -> SizingResult<()> {
        require_positive("fineness_ratio", self.fineness_ratio)?;
        require_non_negative("speed", self.speed)?;
        require_positive("air_density", self.air_density)?;
        require_non_negative("gas_density", self.gas_density)?;
        require_non_negative("drag_coefficient", self.drag_coefficient)?;
        require_non_negative("base_power", self.base_power)?;
        require_non_negative("extra_power", self.extra_power)?;
        require_non_negative("base_mass", self.base_mass)?;
        require_non_negative("avionics_mass", self.avionics_mass)?;
        require_non_negative("cabin_mass", self.cabin_mass)?;

        // Zero daylight leaves nothing to recharge the batteries from.
        let t = self.sunlight_hours;
        if !(t.is_finite() && t > 0.0 && t <= HOURS_PER_DAY) {
            return Err(SizingError::InvalidParameter {
                name: "sunlight_hours",
                value: t,
                reason: "must lie in (0, 24]",
            });
        }
        Ok(())
    }

    /// Hours the batteries carry the load.
    pub fn dark_hours(&self) -> f64 {
        HOURS_PER_DAY - self.sunlight_hours
    }

    /// Mass carried regardless of envelope size, kg.
    pub fn fixed_mass(&self) -> f64 {
        self.base_mass + self.avionics_mass + self.cabin_mass
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds [`BlimpParams`]; starts from the crewed design at 3 km.
pub struct BlimpParamsBuilder {
    params: BlimpParams,
}

impl BlimpParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: BlimpParams {
                fineness_ratio: 5.25,
                speed: 15.0,
                air_density: 0.91,
                gas_density: 0.1786,
                drag_coefficient: 0.04,
                sunlight_hours: 8.0,
                base_power: 40.0,
                extra_power: 200.0,
                base_mass: 1.0,
                avionics_mass: 10.0,
                cabin_mass: 158.0,
                variant: FormulaVariant::default(),
            },
        }
    }

    pub fn fineness_ratio(mut self, v: f64) -> Self { self.params.fineness_ratio = v; self }
    pub fn speed(mut self, v: f64) -> Self { self.params.speed = v; self }
    pub fn air_density(mut self, v: f64) -> Self { self.params.air_density = v; self }
    pub fn gas_density(mut self, v: f64) -> Self { self.params.gas_density = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.params.drag_coefficient = v; self }
    pub fn sunlight_hours(mut self, v: f64) -> Self { self.params.sunlight_hours = v; self }
    pub fn base_power(mut self, v: f64) -> Self { self.params.base_power = v; self }
    pub fn extra_power(mut self, v: f64) -> Self { self.params.extra_power = v; self }
    pub fn base_mass(mut self, v: f64) -> Self { self.params.base_mass = v; self }
    pub fn avionics_mass(mut self, v: f64) -> Self { self.params.avionics_mass = v; self }
    pub fn cabin_mass(mut self, v: f64) -> Self { self.params.cabin_mass = v; self }
    pub fn drag_model(mut self, v: DragModel) -> Self { self.params.variant.drag = v; self }
    pub fn volume_model(mut self, v: VolumeModel) -> Self { self.params.variant.volume = v; self }
    pub fn panel_budget(mut self, v: PanelBudget) -> Self { self.params.variant.panel_budget = v; self }

    pub fn build(self) -> BlimpParams {
        self.params
    }
}

impl Default for BlimpParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
