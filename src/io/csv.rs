use std::io::{self, Write};
use std::path::Path;

use crate::sizing::{DerivedQuantities, EquilibriumResult};

/// Write the weight and upthrust curves of a solved sweep.
///
/// Columns: diameter_m, weight_n, upthrust_n, imbalance_n
pub fn write_curves<W: Write>(writer: &mut W, result: &EquilibriumResult) -> io::Result<()> {
    writeln!(writer, "diameter_m,weight_n,upthrust_n,imbalance_n")?;

    for (w, u) in result.weight_curve.iter().zip(&result.upthrust_curve) {
        writeln!(
            writer,
            "{:.6},{:.4},{:.4},{:.4}",
            w.diameter,
            w.force,
            u.force,
            w.force - u.force,
        )?;
    }

    Ok(())
}

/// Write every derived quantity of a raw sweep, one row per diameter.
///
/// Columns: diameter_m, length_m, area_m2, volume_m3, drag_n, total_power_w,
///          panel_units, panel_mass_kg, battery_wh, battery_units,
///          battery_mass_kg, envelope_mass_kg, gas_mass_kg, total_mass_kg,
///          weight_n, upthrust_n
pub fn write_sweep<W: Write>(writer: &mut W, samples: &[DerivedQuantities]) -> io::Result<()> {
    writeln!(
        writer,
        "diameter_m,length_m,area_m2,volume_m3,drag_n,total_power_w,\
         panel_units,panel_mass_kg,battery_wh,battery_units,battery_mass_kg,\
         envelope_mass_kg,gas_mass_kg,total_mass_kg,weight_n,upthrust_n"
    )?;

    for q in samples {
        writeln!(
            writer,
            "{:.6},{:.4},{:.4},{:.4},{:.4},{:.3},\
             {},{:.3},{:.3},{},{:.3},\
             {:.3},{:.3},{:.3},{:.4},{:.4}",
            q.diameter, q.length, q.surface_area, q.volume, q.drag, q.total_power,
            units(q.panel_units), q.panel_mass, q.battery_energy,
            units(q.battery_units), q.battery_mass,
            q.envelope_mass, q.gas_mass, q.total_mass, q.weight, q.upthrust,
        )?;
    }

    Ok(())
}

fn units(count: Option<u64>) -> String {
    count.map_or_else(String::new, |n| n.to_string())
}

/// Write solved curves to a CSV file at the given path.
pub fn write_curves_file(path: impl AsRef<Path>, result: &EquilibriumResult) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_curves(&mut file, result)
}

/// Write a raw sweep to a CSV file at the given path.
pub fn write_sweep_file(path: impl AsRef<Path>, samples: &[DerivedQuantities]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_sweep(&mut file, samples)
}
