use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::config::DesignConfig;
use crate::error::SizingResult;
use crate::sizing::EquilibriumResult;
use crate::vehicle::TechnologySelection;

/// Key figures of a solved design, for export.
#[derive(Debug, Clone, Serialize)]
pub struct DesignSummary {
    pub design: String,
    pub selection: TechnologySelection,
    pub equilibrium: EquilibriumFigures,
    pub sweep: SweepFigures,
}

#[derive(Debug, Clone, Serialize)]
pub struct EquilibriumFigures {
    pub diameter_m: f64,
    pub length_m: f64,
    pub volume_m3: f64,
    pub weight_n: f64,
    pub upthrust_n: f64,
    pub drag_n: f64,
    pub total_power_w: f64,
    pub panel_units: Option<u64>,
    pub panel_mass_kg: f64,
    pub battery_energy_kwh: f64,
    pub battery_units: Option<u64>,
    pub battery_mass_kg: f64,
    pub envelope_mass_kg: f64,
    pub gas_mass_kg: f64,
    pub total_mass_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SweepFigures {
    pub samples: usize,
    pub sample_index: usize,
    pub matching_samples: usize,
    pub crossings: usize,
    pub multiple_crossings: bool,
}

impl DesignSummary {
    pub fn new(config: &DesignConfig, result: &EquilibriumResult) -> Self {
        let q = &result.quantities;
        DesignSummary {
            design: config.name.clone(),
            selection: config.selection.clone(),
            equilibrium: EquilibriumFigures {
                diameter_m: q.diameter,
                length_m: q.length,
                volume_m3: q.volume,
                weight_n: q.weight,
                upthrust_n: q.upthrust,
                drag_n: q.drag,
                total_power_w: q.total_power,
                panel_units: q.panel_units,
                panel_mass_kg: q.panel_mass,
                battery_energy_kwh: q.battery_energy / 1000.0,
                battery_units: q.battery_units,
                battery_mass_kg: q.battery_mass,
                envelope_mass_kg: q.envelope_mass,
                gas_mass_kg: q.gas_mass,
                total_mass_kg: q.total_mass,
            },
            sweep: SweepFigures {
                samples: result.weight_curve.len(),
                sample_index: result.sample_index,
                matching_samples: result.matches.len(),
                crossings: result.crossings,
                multiple_crossings: result.has_multiple_crossings(),
            },
        }
    }
}

/// Write a design summary as pretty JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &DesignSummary) -> SizingResult<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a design summary JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summary: &DesignSummary) -> SizingResult<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, summary)
}
