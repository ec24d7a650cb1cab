//! Property-based tests for the sizing model and equilibrium solver.
//!
//! Covers: geometry monotonicity, buoyancy identity, weight monotonicity
//! across sweeps, first-match solver policy, discrete unit rounding.

use blimp_sizing::physics::geometry::{self, VolumeModel};
use blimp_sizing::physics::G;
use blimp_sizing::sizing::{EquilibriumSolver, SizingModel, SweepConfig};
use blimp_sizing::vehicle::{BlimpParams, PanelSpec};
use blimp_sizing::{presets, SizingError};
use proptest::prelude::*;

fn mk2_model(params: BlimpParams) -> SizingModel {
    let cfg = presets::mk2();
    SizingModel::from_catalog(params, &cfg.catalog, &cfg.selection).unwrap()
}

// ── Geometry ─────────────────────────────────────────────────────────

proptest! {
    /// Surface area grows with diameter.
    #[test]
    fn area_increases_with_diameter(d in 0.1f64..50.0, dd in 0.01f64..5.0, k in 0.2f64..10.0) {
        prop_assert!(geometry::surface_area(d + dd, k) > geometry::surface_area(d, k));
    }

    /// Surface area grows with fineness ratio.
    #[test]
    fn area_increases_with_fineness(d in 0.1f64..50.0, k in 0.2f64..10.0, dk in 0.01f64..3.0) {
        prop_assert!(geometry::surface_area(d, k + dk) > geometry::surface_area(d, k));
    }

    /// Ellipsoid volume grows with diameter and is linear in k.
    #[test]
    fn ellipsoid_volume_monotone(d in 0.1f64..50.0, dd in 0.01f64..5.0, k in 0.2f64..10.0) {
        let v = geometry::volume(d, k, VolumeModel::Ellipsoid);
        prop_assert!(geometry::volume(d + dd, k, VolumeModel::Ellipsoid) > v);
        prop_assert!(geometry::volume(d, 2.0 * k, VolumeModel::Ellipsoid) > v);
        let ratio = geometry::volume(d, 2.0 * k, VolumeModel::Ellipsoid) / v;
        prop_assert!((ratio - 2.0).abs() < 1e-12);
    }

    /// Simplified volume grows with diameter.
    #[test]
    fn simplified_volume_monotone(d in 0.1f64..50.0, dd in 0.01f64..5.0) {
        prop_assert!(
            geometry::volume(d + dd, 1.0, VolumeModel::Simplified)
                > geometry::volume(d, 1.0, VolumeModel::Simplified)
        );
    }
}

// ── Model ────────────────────────────────────────────────────────────

proptest! {
    /// Upthrust is exactly the weight of displaced air.
    #[test]
    fn upthrust_identity(d in 0.5f64..30.0, k in 1.0f64..8.0, rho in 0.3f64..1.3) {
        let params = BlimpParams::builder().fineness_ratio(k).air_density(rho).build();
        let q = mk2_model(params).evaluate(d).unwrap();
        prop_assert_eq!(q.upthrust, rho * geometry::volume(d, k, VolumeModel::Ellipsoid) * G);
    }

    /// Weight never drops as the envelope grows.
    #[test]
    fn weight_non_decreasing(speed in 0.0f64..25.0, k in 2.0f64..8.0, sun in 4.0f64..16.0) {
        let params = BlimpParams::builder().speed(speed).fineness_ratio(k).sunlight_hours(sun).build();
        let model = mk2_model(params);
        let solver = EquilibriumSolver::new(SweepConfig { d_min: 1.0, d_max: 20.0, samples: 400, tolerance: 1.0 });
        let samples = solver.sweep(&model).unwrap();
        for w in samples.windows(2) {
            prop_assert!(w[1].weight >= w[0].weight,
                "weight fell from {} to {} between D={} and D={}",
                w[0].weight, w[1].weight, w[0].diameter, w[1].diameter);
        }
    }

    /// Whole panels: an exact multiple of the unit rating needs exactly that many.
    #[test]
    fn discrete_panels_exact_multiple(n in 0u64..2000, unit in 1u32..2000) {
        let unit = unit as f64;
        let spec = PanelSpec::Discrete { unit_power_w: unit, unit_mass_kg: 7.2 };
        let sized = spec.size(n as f64 * unit);
        prop_assert_eq!(sized.units, Some(n));
        let over = spec.size(n as f64 * unit + 0.5);
        prop_assert_eq!(over.units, Some(n + 1));
    }
}

// ── Solver ───────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The reported diameter is the first sample within tolerance.
    #[test]
    fn solver_reports_first_match(tolerance in 1.0f64..50.0, samples in 200usize..1500) {
        let cfg = presets::mk1();
        let model = cfg.model().unwrap();
        let solver = EquilibriumSolver::new(SweepConfig { d_min: 0.5, d_max: 8.0, samples, tolerance });

        match solver.solve(&model) {
            Ok(result) => {
                prop_assert!(result.quantities.imbalance().abs() < tolerance);
                for (w, u) in result.weight_curve.iter().zip(&result.upthrust_curve).take(result.sample_index) {
                    prop_assert!((w.force - u.force).abs() >= tolerance);
                }
                prop_assert_eq!(result.matches[0], result.sample_index);
            }
            Err(SizingError::NoEquilibriumFound { closest_imbalance, .. }) => {
                prop_assert!(closest_imbalance >= tolerance);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }

    /// A range entirely below the crossing is never reported as solved.
    #[test]
    fn below_crossing_is_unsolved(d_max in 1.0f64..4.0, samples in 2usize..300) {
        let cfg = presets::mk1();
        let solver = EquilibriumSolver::new(SweepConfig { d_min: 0.5, d_max, samples, tolerance: 5.0 });
        let is_unsolved = matches!(
            solver.solve(&cfg.model().unwrap()),
            Err(SizingError::NoEquilibriumFound { .. })
        );
        prop_assert!(is_unsolved);
    }
}
