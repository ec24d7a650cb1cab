use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, SizingError, SizingResult};

// ---------------------------------------------------------------------------
// Component technologies
// ---------------------------------------------------------------------------

/// Propulsion motor sizing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum MotorSpec {
    /// Catalogue motors of known mass, independent of power draw.
    Fixed { unit_mass_kg: f64, count: u32 },
    /// Mass scales with shaft power, W/kg.
    PowerDensity { w_per_kg: f64 },
}

/// Solar array sizing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum PanelSpec {
    /// Array mass proportional to rated power, W/kg.
    Continuous { w_per_kg: f64 },
    /// Whole panels of fixed rating.
    Discrete { unit_power_w: f64, unit_mass_kg: f64 },
}

/// Battery pack sizing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BatterySpec {
    /// Pack mass proportional to stored energy, Wh/kg.
    Continuous { wh_per_kg: f64 },
    /// Whole packs of fixed capacity.
    Discrete { unit_capacity_wh: f64, unit_mass_kg: f64 },
}

/// Envelope skin fabric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeMaterial {
    pub kg_per_m2: f64,
}

/// Outcome of sizing one component against a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitSizing {
    /// Whole units installed, `None` for continuous sizing.
    pub units: Option<u64>,
    pub mass: f64, // kg
}

/// Smallest whole number of units covering `requirement`.
pub fn units_required(requirement: f64, unit_rating: f64) -> u64 {
    (requirement / unit_rating).ceil().max(0.0) as u64
}

fn discrete(requirement: f64, unit_rating: f64, unit_mass: f64) -> UnitSizing {
    let units = units_required(requirement, unit_rating);
    UnitSizing { units: Some(units), mass: units as f64 * unit_mass }
}

impl MotorSpec {
    pub fn validate(&self) -> SizingResult<()> {
        match *self {
            MotorSpec::Fixed { unit_mass_kg, .. } => {
                require_non_negative("motor.unit_mass_kg", unit_mass_kg)?;
            }
            MotorSpec::PowerDensity { w_per_kg } => {
                require_positive("motor.w_per_kg", w_per_kg)?;
            }
        }
        Ok(())
    }

    /// Installed motor mass for a given shaft power, kg.
    pub fn mass(&self, motor_power: f64) -> f64 {
        match *self {
            MotorSpec::Fixed { unit_mass_kg, count } => unit_mass_kg * count as f64,
            MotorSpec::PowerDensity { w_per_kg } => motor_power / w_per_kg,
        }
    }
}

impl PanelSpec {
    pub fn validate(&self) -> SizingResult<()> {
        match *self {
            PanelSpec::Continuous { w_per_kg } => {
                require_positive("panel.w_per_kg", w_per_kg)?;
            }
            PanelSpec::Discrete { unit_power_w, unit_mass_kg } => {
                require_positive("panel.unit_power_w", unit_power_w)?;
                require_non_negative("panel.unit_mass_kg", unit_mass_kg)?;
            }
        }
        Ok(())
    }

    pub fn size(&self, panel_power: f64) -> UnitSizing {
        match *self {
            PanelSpec::Continuous { w_per_kg } => {
                UnitSizing { units: None, mass: panel_power / w_per_kg }
            }
            PanelSpec::Discrete { unit_power_w, unit_mass_kg } => {
                discrete(panel_power, unit_power_w, unit_mass_kg)
            }
        }
    }
}

impl BatterySpec {
    pub fn validate(&self) -> SizingResult<()> {
        match *self {
            BatterySpec::Continuous { wh_per_kg } => {
                require_positive("battery.wh_per_kg", wh_per_kg)?;
            }
            BatterySpec::Discrete { unit_capacity_wh, unit_mass_kg } => {
                require_positive("battery.unit_capacity_wh", unit_capacity_wh)?;
                require_non_negative("battery.unit_mass_kg", unit_mass_kg)?;
            }
        }
        Ok(())
    }

    pub fn size(&self, energy_wh: f64) -> UnitSizing {
        match *self {
            BatterySpec::Continuous { wh_per_kg } => {
                UnitSizing { units: None, mass: energy_wh / wh_per_kg }
            }
            BatterySpec::Discrete { unit_capacity_wh, unit_mass_kg } => {
                discrete(energy_wh, unit_capacity_wh, unit_mass_kg)
            }
        }
    }
}

impl EnvelopeMaterial {
    pub fn validate(&self) -> SizingResult<()> {
        require_non_negative("envelope.kg_per_m2", self.kg_per_m2)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Catalog and selection
// ---------------------------------------------------------------------------

/// Named component technologies available to a design.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnologyCatalog {
    #[serde(default)]
    pub motors: BTreeMap<String, MotorSpec>,
    #[serde(default)]
    pub panels: BTreeMap<String, PanelSpec>,
    #[serde(default)]
    pub batteries: BTreeMap<String, BatterySpec>,
    #[serde(default)]
    pub envelopes: BTreeMap<String, EnvelopeMaterial>,
}

/// Which catalog entry each component uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnologySelection {
    pub motor: String,
    pub panel: String,
    pub battery: String,
    pub envelope: String,
}

/// Validated component technologies for one design.
#[derive(Debug, Clone, PartialEq)]
pub struct Technology {
    pub motor: MotorSpec,
    pub panel: PanelSpec,
    pub battery: BatterySpec,
    pub envelope: EnvelopeMaterial,
}

fn lookup<'a, T>(table: &'a BTreeMap<String, T>, kind: &'static str, key: &str) -> SizingResult<&'a T> {
    table
        .get(key)
        .ok_or_else(|| SizingError::UnknownTechnology { kind, key: key.to_string() })
}

impl TechnologyCatalog {
    pub fn motor(&self, key: &str) -> SizingResult<&MotorSpec> {
        lookup(&self.motors, "motor", key)
    }

    pub fn panel(&self, key: &str) -> SizingResult<&PanelSpec> {
        lookup(&self.panels, "panel", key)
    }

    pub fn battery(&self, key: &str) -> SizingResult<&BatterySpec> {
        lookup(&self.batteries, "battery", key)
    }

    pub fn envelope(&self, key: &str) -> SizingResult<&EnvelopeMaterial> {
        lookup(&self.envelopes, "envelope material", key)
    }

    /// Look up and validate every selected technology.
    pub fn resolve(&self, selection: &TechnologySelection) -> SizingResult<Technology> {
        let tech = Technology {
            motor: self.motor(&selection.motor)?.clone(),
            panel: self.panel(&selection.panel)?.clone(),
            battery: self.battery(&selection.battery)?.clone(),
            envelope: *self.envelope(&selection.envelope)?,
        };
        tech.motor.validate()?;
        tech.panel.validate()?;
        tech.battery.validate()?;
        tech.envelope.validate()?;
        Ok(tech)
    }

    pub fn with_motor(mut self, key: impl Into<String>, spec: MotorSpec) -> Self {
        self.motors.insert(key.into(), spec);
        self
    }

    pub fn with_panel(mut self, key: impl Into<String>, spec: PanelSpec) -> Self {
        self.panels.insert(key.into(), spec);
        self
    }

    pub fn with_battery(mut self, key: impl Into<String>, spec: BatterySpec) -> Self {
        self.batteries.insert(key.into(), spec);
        self
    }

    pub fn with_envelope(mut self, key: impl Into<String>, material: EnvelopeMaterial) -> Self {
        self.envelopes.insert(key.into(), material);
        self
    }
}

impl TechnologySelection {
    pub fn new(
        motor: impl Into<String>,
        panel: impl Into<String>,
        battery: impl Into<String>,
        envelope: impl Into<String>,
    ) -> Self {
        Self {
            motor: motor.into(),
            panel: panel.into(),
            battery: battery.into(),
            envelope: envelope.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TechnologyCatalog {
        TechnologyCatalog::default()
            .with_motor("PMSM", MotorSpec::PowerDensity { w_per_kg: 3000.0 })
            .with_panel("430W", PanelSpec::Discrete { unit_power_w: 430.0, unit_mass_kg: 7.2 })
            .with_battery("LFP", BatterySpec::Continuous { wh_per_kg: 150.0 })
            .with_envelope("PET", EnvelopeMaterial { kg_per_m2: 0.06 })
    }

    #[test]
    fn exact_multiple_does_not_round_up() {
        let panel = PanelSpec::Discrete { unit_power_w: 430.0, unit_mass_kg: 7.2 };
        let s = panel.size(430.0 * 3.0);
        assert_eq!(s.units, Some(3));
        assert!((s.mass - 21.6).abs() < 1e-12);

        let s = panel.size(430.0 * 3.0 + 1e-6);
        assert_eq!(s.units, Some(4));
    }

    #[test]
    fn battery_packs_round_up() {
        let pack = BatterySpec::Discrete { unit_capacity_wh: 5120.0, unit_mass_kg: 50.0 };
        assert_eq!(pack.size(5120.0).units, Some(1));
        assert_eq!(pack.size(5121.0).units, Some(2));
        assert_eq!(pack.size(0.0).units, Some(0));
        assert_eq!(pack.size(0.0).mass, 0.0);
    }

    #[test]
    fn continuous_sizing_has_no_units() {
        let battery = BatterySpec::Continuous { wh_per_kg: 150.0 };
        let s = battery.size(3000.0);
        assert_eq!(s.units, None);
        assert!((s.mass - 20.0).abs() < 1e-12);
    }

    #[test]
    fn motor_mass_rules() {
        let twin = MotorSpec::Fixed { unit_mass_kg: 4.8, count: 2 };
        assert!((twin.mass(1e6) - 9.6).abs() < 1e-12);
        let density = MotorSpec::PowerDensity { w_per_kg: 3000.0 };
        assert!((density.mass(6000.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn resolve_known_selection() {
        let sel = TechnologySelection::new("PMSM", "430W", "LFP", "PET");
        let tech = catalog().resolve(&sel).unwrap();
        assert_eq!(tech.envelope.kg_per_m2, 0.06);
    }

    #[test]
    fn unknown_key_is_reported_with_its_kind() {
        let sel = TechnologySelection::new("PMSM", "430W", "NMC", "PET");
        match catalog().resolve(&sel) {
            Err(SizingError::UnknownTechnology { kind, key }) => {
                assert_eq!(kind, "battery");
                assert_eq!(key, "NMC");
            }
            other => panic!("expected UnknownTechnology, got {:?}", other),
        }
    }

    #[test]
    fn zero_rated_panel_is_rejected() {
        let cat = catalog().with_panel("bad", PanelSpec::Discrete { unit_power_w: 0.0, unit_mass_kg: 7.2 });
        let sel = TechnologySelection::new("PMSM", "bad", "LFP", "PET");
        assert!(matches!(cat.resolve(&sel), Err(SizingError::InvalidParameter { .. })));
    }

    #[test]
    fn tagged_json_spec() {
        let spec: PanelSpec =
            serde_json::from_str(r#"{"model":"discrete","unit_power_w":430.0,"unit_mass_kg":7.2}"#).unwrap();
        assert_eq!(spec, PanelSpec::Discrete { unit_power_w: 430.0, unit_mass_kg: 7.2 });
    }
}
