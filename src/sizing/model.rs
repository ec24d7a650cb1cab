use serde::Serialize;

use crate::error::{require_positive, SizingResult};
use crate::physics::{aerodynamics, geometry, G, HOURS_PER_DAY};
use crate::vehicle::{BlimpParams, PanelBudget, Technology, TechnologyCatalog, TechnologySelection};

// ---------------------------------------------------------------------------
// Derived quantities at one diameter
// ---------------------------------------------------------------------------

/// Everything the model derives for one envelope diameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedQuantities {
    pub diameter: f64,        // m
    pub length: f64,          // m
    pub surface_area: f64,    // m^2
    pub volume: f64,          // m^3
    pub reference_area: f64,  // drag reference area, m^2
    pub drag: f64,            // N
    pub motor_power: f64,     // W
    pub total_power: f64,     // W
    pub panel_power: f64,     // W, rated array output
    pub panel_units: Option<u64>,
    pub panel_mass: f64,      // kg
    pub battery_energy: f64,  // Wh
    pub battery_units: Option<u64>,
    pub battery_mass: f64,    // kg
    pub motor_mass: f64,      // kg
    pub envelope_mass: f64,   // kg
    pub gas_mass: f64,        // kg
    pub fixed_mass: f64,      // base + avionics + cabin, kg
    pub total_mass: f64,      // kg
    pub weight: f64,          // N
    pub upthrust: f64,        // N
}

impl DerivedQuantities {
    /// Weight minus upthrust; positive means the craft is too heavy.
    pub fn imbalance(&self) -> f64 {
        self.weight - self.upthrust
    }

    /// Upthrust left over after lifting the craft, N.
    pub fn net_lift(&self) -> f64 {
        -self.imbalance()
    }
}

// ---------------------------------------------------------------------------
// Sizing model
// ---------------------------------------------------------------------------

/// Validated parameters and technologies, ready to evaluate at any diameter.
#[derive(Debug, Clone)]
pub struct SizingModel {
    params: BlimpParams,
    tech: Technology,
}

impl SizingModel {
    pub fn new(params: BlimpParams, tech: Technology) -> SizingResult<Self> {
        params.validate()?;
        tech.motor.validate()?;
        tech.panel.validate()?;
        tech.battery.validate()?;
        tech.envelope.validate()?;
        Ok(Self { params, tech })
    }

    /// Resolve the selection against a catalog, then build the model.
    pub fn from_catalog(
        params: BlimpParams,
        catalog: &TechnologyCatalog,
        selection: &TechnologySelection,
    ) -> SizingResult<Self> {
        let tech = catalog.resolve(selection)?;
        Self::new(params, tech)
    }

    pub fn params(&self) -> &BlimpParams {
        &self.params
    }

    pub fn technology(&self) -> &Technology {
        &self.tech
    }

    /// Size every subsystem for an envelope of `diameter` metres.
    ///
    /// Geometry feeds drag, drag feeds propulsion power, power feeds the
    /// panel and battery sizing, and all masses sum into weight.
    pub fn evaluate(&self, diameter: f64) -> SizingResult<DerivedQuantities> {
        let d = require_positive("diameter", diameter)?;
        let p = &self.params;
        let k = p.fineness_ratio;

        // --- Geometry ---
        let length = geometry::length(d, k);
        let surface_area = geometry::surface_area(d, k);
        let volume = geometry::volume(d, k, p.variant.volume);

        // --- Drag and propulsion ---
        let reference_area = aerodynamics::reference_area(p.variant.drag, d, volume);
        let drag = aerodynamics::drag_force(p.air_density, p.speed, p.drag_coefficient, reference_area);
        let motor_power = aerodynamics::propulsive_power(drag, p.speed);
        let hotel_power = p.base_power + p.extra_power;
        let total_power = motor_power + hotel_power;

        // --- Energy budget ---
        let day_scale = HOURS_PER_DAY / p.sunlight_hours;
        let panel_power = match p.variant.panel_budget {
            PanelBudget::WholeLoad => total_power * day_scale,
            PanelBudget::PropulsionOnly => motor_power * day_scale + hotel_power,
        };
        let battery_energy = total_power * p.dark_hours();

        let panels = self.tech.panel.size(panel_power);
        let batteries = self.tech.battery.size(battery_energy);
        let motor_mass = self.tech.motor.mass(motor_power);

        // --- Mass and forces ---
        let envelope_mass = surface_area * self.tech.envelope.kg_per_m2;
        let gas_mass = p.gas_density * volume;
        let fixed_mass = p.fixed_mass();
        let total_mass = fixed_mass
            + panels.mass
            + batteries.mass
            + motor_mass
            + envelope_mass
            + gas_mass;

        Ok(DerivedQuantities {
            diameter: d,
            length,
            surface_area,
            volume,
            reference_area,
            drag,
            motor_power,
            total_power,
            panel_power,
            panel_units: panels.units,
            panel_mass: panels.mass,
            battery_energy,
            battery_units: batteries.units,
            battery_mass: batteries.mass,
            motor_mass,
            envelope_mass,
            gas_mass,
            fixed_mass,
            total_mass,
            weight: total_mass * G,
            upthrust: p.air_density * volume * G,
        })
    }
}
