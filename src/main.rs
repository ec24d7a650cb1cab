use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use blimp_sizing::io::{csv, json};
use blimp_sizing::sizing::{EquilibriumResult, SizingModel};
use blimp_sizing::{presets, DesignConfig, SizingError, SizingResult};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find the envelope diameter at which a solar blimp's weight equals its upthrust."
)]
struct Cli {
    /// Design config JSON; the built-in Mk2 design when omitted.
    config: Option<PathBuf>,

    /// Write the weight/upthrust curves (or the raw sweep when unsolved) as CSV.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Write the equilibrium summary as JSON.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> SizingResult<()> {
    let config = match &cli.config {
        Some(path) => DesignConfig::from_file(path)?,
        None => presets::mk2(),
    };
    let model = config.model()?;
    let solver = config.solver();

    print_header(&config, &model);

    let result = match solver.solve(&model) {
        Ok(r) => r,
        Err(e @ SizingError::NoEquilibriumFound { .. }) => {
            // Still export the raw sweep so the curves can be inspected.
            if let Some(path) = &cli.csv {
                csv::write_sweep_file(path, &solver.sweep(&model)?)?;
                eprintln!("  Wrote unsolved sweep to {}", path.display());
            }
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    print_equilibrium(&result);
    if result.has_multiple_crossings() {
        eprintln!(
            "  warning: weight and upthrust cross {} times in [{}, {}] m; \
             reporting the smallest diameter",
            result.crossings, config.sweep.d_min, config.sweep.d_max
        );
    }
    if let Some(refined) = solver.bisect_first_crossing(&model, 60)? {
        println!("  First crossing (bisection): {:>8.4} m", refined);
        println!();
    }
    print_curve_table(&result);

    if let Some(path) = &cli.csv {
        csv::write_curves_file(path, &result)?;
        println!("  Exported curves: {}", path.display());
    }
    if let Some(path) = &cli.json {
        json::write_summary_file(path, &json::DesignSummary::new(&config, &result))?;
        println!("  Exported summary: {}", path.display());
    }
    println!("====================================================================");
    println!();
    Ok(())
}

fn print_header(config: &DesignConfig, model: &SizingModel) {
    let p = model.params();
    let sel = &config.selection;

    println!();
    println!("====================================================================");
    println!("  BLIMP EQUILIBRIUM SIZING — {}", config.name);
    println!("====================================================================");
    println!();
    println!("  Design Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Fineness:      {:>8.2}       Speed:        {:>8.1} m/s",
        p.fineness_ratio, p.speed
    );
    println!(
        "  rho air:       {:>8.4} kg/m^3  rho gas:   {:>8.4} kg/m^3",
        p.air_density, p.gas_density
    );
    println!(
        "  Cd:            {:>8.3}       Sunlight:     {:>8.1} h",
        p.drag_coefficient, p.sunlight_hours
    );
    println!(
        "  Base load:     {:>8.0} W     Extra load:   {:>8.0} W",
        p.base_power, p.extra_power
    );
    println!(
        "  Fixed mass:    {:>8.1} kg    Variant:      {:?}/{:?}/{:?}",
        p.fixed_mass(),
        p.variant.drag,
        p.variant.volume,
        p.variant.panel_budget
    );
    println!(
        "  Motor: {}   Panel: {}   Battery: {}   Envelope: {} ({:.2} kg/m^2)",
        sel.motor,
        sel.panel,
        sel.battery,
        sel.envelope,
        model.technology().envelope.kg_per_m2
    );
    println!();
}

fn print_equilibrium(result: &EquilibriumResult) {
    let q = &result.quantities;

    println!("  Equilibrium");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Diameter:      {:>8.3} m     Length:       {:>8.2} m",
        q.diameter, q.length
    );
    println!(
        "  Weight:        {:>8.1} N     Upthrust:     {:>8.1} N",
        q.weight, q.upthrust
    );
    println!(
        "  Volume:        {:>8.1} m^3   Surface:      {:>8.1} m^2",
        q.volume, q.surface_area
    );
    println!(
        "  Drag:          {:>8.1} N     Total power:  {:>8.1} W",
        q.drag, q.total_power
    );
    println!("  Net lift:      {:>8.2} N", q.net_lift());
    println!();

    println!("  Mass Breakdown");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Panels:        {:>8.1} kg{}", q.panel_mass, unit_note(q.panel_units, "panels"));
    println!(
        "  Batteries:     {:>8.1} kg{}   ({:.1} kWh)",
        q.battery_mass,
        unit_note(q.battery_units, "packs"),
        q.battery_energy / 1000.0
    );
    println!("  Motors:        {:>8.1} kg", q.motor_mass);
    println!("  Envelope:      {:>8.1} kg", q.envelope_mass);
    println!("  Lifting gas:   {:>8.1} kg", q.gas_mass);
    println!("  Fixed:         {:>8.1} kg", q.fixed_mass);
    println!("  Total:         {:>8.1} kg", q.total_mass);
    println!();
}

fn unit_note(units: Option<u64>, what: &str) -> String {
    units.map_or_else(String::new, |n| format!("   ({n} {what})"))
}

fn print_curve_table(result: &EquilibriumResult) {
    println!("  Weight / Upthrust");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>9}  {:>11}  {:>11}  {:>10}", "D (m)", "weight (N)", "upthr. (N)", "W-U (N)");
    println!("  {}", "─".repeat(48));

    let n = result.weight_curve.len();
    let sample_interval = (n / 20).max(1);
    for (i, (w, u)) in result.weight_curve.iter().zip(&result.upthrust_curve).enumerate() {
        let marker = if i == result.sample_index { "  <- equilibrium" } else { "" };
        if i % sample_interval != 0 && i != n - 1 && marker.is_empty() {
            continue;
        }
        println!(
            "  {:>9.3}  {:>11.1}  {:>11.1}  {:>10.1}{}",
            w.diameter,
            w.force,
            u.force,
            w.force - u.force,
            marker
        );
    }
    println!();
}
