use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, VLine};

use blimp_sizing::sizing::EquilibriumResult;
use blimp_sizing::{presets, DesignConfig, SizingResult};

#[derive(Parser, Debug)]
#[command(version, about = "Plot weight and upthrust against envelope diameter.")]
struct Cli {
    /// Design config JSON; the built-in Mk2 design when omitted.
    config: Option<PathBuf>,
}

fn main() -> eframe::Result {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => match DesignConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        None => presets::mk2(),
    };

    let result = match solve(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let app = SizingViz { name: config.name, result };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 750.0]),
        ..Default::default()
    };
    eframe::run_native("Blimp Equilibrium Sizing", options, Box::new(|_| Ok(Box::new(app))))
}

fn solve(config: &DesignConfig) -> SizingResult<EquilibriumResult> {
    config.solver().solve(&config.model()?)
}

struct SizingViz {
    name: String,
    result: EquilibriumResult,
}

impl eframe::App for SizingViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let r = &self.result;
        let q = &r.quantities;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!("Design: {}", self.name));
            ui.label(format!(
                "Weight = Upthrust = {:.3} kN at D = {:.3} m  |  L = {:.2} m  |  crossings: {}",
                q.weight / 1000.0,
                q.diameter,
                q.length,
                r.crossings,
            ));
        });

        egui::SidePanel::right("breakdown").show(ctx, |ui| {
            ui.heading("At equilibrium");
            ui.label(format!("Envelope volume: {:.1} m^3", q.volume));
            ui.label(format!("Envelope mass: {:.1} kg", q.envelope_mass));
            ui.label(format!("Drag force: {:.1} N", q.drag));
            ui.label(format!("Net lift: {:.2} N", q.net_lift()));
            ui.label(format!("Total power: {:.1} W", q.total_power));
            ui.label(format!("Panel mass: {:.1} kg", q.panel_mass));
            ui.label(format!("Battery mass: {:.1} kg", q.battery_mass));
            ui.label(format!("Battery energy: {:.1} kWh", q.battery_energy / 1000.0));
            if r.has_multiple_crossings() {
                ui.colored_label(egui::Color32::YELLOW, "Curves cross more than once");
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let weight: PlotPoints = r.weight_curve.iter().map(|p| [p.diameter, p.force]).collect();
            let upthrust: PlotPoints = r.upthrust_curve.iter().map(|p| [p.diameter, p.force]).collect();

            Plot::new("forces")
                .legend(Legend::default())
                .x_axis_label("Diameter (m)")
                .y_axis_label("Weight or upthrust (N)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Weight", weight).color(egui::Color32::BLUE));
                    plot_ui.line(Line::new("Upthrust", upthrust).color(egui::Color32::RED));
                    plot_ui.vline(VLine::new("Equilibrium diameter", q.diameter));
                    plot_ui.points(
                        Points::new("Equilibrium point", vec![[q.diameter, q.upthrust]])
                            .radius(5.0)
                            .color(egui::Color32::WHITE),
                    );
                });
        });
    }
}
