use serde::{Deserialize, Serialize};

use super::model::{DerivedQuantities, SizingModel};
use crate::error::{require_positive, SizingError, SizingResult};

// ---------------------------------------------------------------------------
// Sweep configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    pub d_min: f64,      // m
    pub d_max: f64,      // m
    pub samples: usize,
    pub tolerance: f64,  // |W - U| acceptance, N
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            d_min: 7.0,
            d_max: 9.0,
            samples: 1000,
            tolerance: 1.0,
        }
    }
}

impl SweepConfig {
    pub fn validate(&self) -> SizingResult<()> {
        require_positive("d_min", self.d_min)?;
        require_positive("d_max", self.d_max)?;
        require_positive("tolerance", self.tolerance)?;
        if self.d_max < self.d_min {
            return Err(SizingError::InvalidParameter {
                name: "d_max",
                value: self.d_max,
                reason: "must not be below d_min",
            });
        }
        if self.samples == 0 {
            return Err(SizingError::InvalidParameter {
                name: "samples",
                value: 0.0,
                reason: "need at least one sample",
            });
        }
        Ok(())
    }

    /// Evenly spaced diameters from `d_min` to `d_max` inclusive.
    pub fn diameters(&self) -> Vec<f64> {
        if self.samples == 1 {
            return vec![self.d_min];
        }
        let step = (self.d_max - self.d_min) / (self.samples as f64 - 1.0);
        (0..self.samples).map(|i| self.d_min + step * i as f64).collect()
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// One point of a force-vs-diameter curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub diameter: f64, // m
    pub force: f64,    // N
}

#[derive(Debug, Clone, Serialize)]
pub struct EquilibriumResult {
    pub diameter: f64,
    pub sample_index: usize,
    pub quantities: DerivedQuantities,
    pub weight_curve: Vec<CurvePoint>,
    pub upthrust_curve: Vec<CurvePoint>,
    /// Every sample index within tolerance, ascending.
    pub matches: Vec<usize>,
    /// Sign changes of `weight - upthrust` across the sweep.
    pub crossings: usize,
}

impl EquilibriumResult {
    pub fn weight(&self) -> f64 {
        self.quantities.weight
    }

    pub fn upthrust(&self) -> f64 {
        self.quantities.upthrust
    }

    /// More than one crossing means the reported diameter is only the
    /// smallest candidate; callers should say so.
    pub fn has_multiple_crossings(&self) -> bool {
        self.crossings > 1
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct EquilibriumSolver {
    pub sweep: SweepConfig,
}

impl EquilibriumSolver {
    pub fn new(sweep: SweepConfig) -> Self {
        Self { sweep }
    }

    /// Evaluate the model at every sampled diameter, ascending.
    pub fn sweep(&self, model: &SizingModel) -> SizingResult<Vec<DerivedQuantities>> {
        self.sweep.validate()?;
        self.sweep
            .diameters()
            .into_iter()
            .map(|d| model.evaluate(d))
            .collect()
    }

    /// First (smallest) sampled diameter where weight and upthrust agree
    /// within tolerance.
    pub fn solve(&self, model: &SizingModel) -> SizingResult<EquilibriumResult> {
        let samples = self.sweep(model)?;
        let tol = self.sweep.tolerance;

        let matches: Vec<usize> = samples
            .iter()
            .enumerate()
            .filter(|(_, q)| q.imbalance().abs() < tol)
            .map(|(i, _)| i)
            .collect();

        let Some(&first) = matches.first() else {
            return Err(self.unsolved(&samples));
        };

        let crossings = count_crossings(&samples);
        let weight_curve = samples
            .iter()
            .map(|q| CurvePoint { diameter: q.diameter, force: q.weight })
            .collect();
        let upthrust_curve = samples
            .iter()
            .map(|q| CurvePoint { diameter: q.diameter, force: q.upthrust })
            .collect();
        let quantities = samples[first].clone();

        Ok(EquilibriumResult {
            diameter: quantities.diameter,
            sample_index: first,
            quantities,
            weight_curve,
            upthrust_curve,
            matches,
            crossings,
        })
    }

    /// Refine the first sign change of `weight - upthrust` by bisection.
    ///
    /// Returns `None` when the sweep never changes sign. Discrete panel and
    /// battery counts make the curve step-wise, so the refined point can be
    /// a jump rather than a smooth root.
    pub fn bisect_first_crossing(
        &self,
        model: &SizingModel,
        max_iterations: usize,
    ) -> SizingResult<Option<f64>> {
        let samples = self.sweep(model)?;
        let Some(i) = first_sign_change(&samples) else {
            return Ok(None);
        };

        let mut lo = samples[i - 1].diameter;
        let mut hi = samples[i].diameter;
        let lo_sign = samples[i - 1].imbalance() > 0.0;

        for _ in 0..max_iterations {
            let mid = 0.5 * (lo + hi);
            if (hi - lo) < 1e-12 * hi {
                break;
            }
            if (model.evaluate(mid)?.imbalance() > 0.0) == lo_sign {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(Some(0.5 * (lo + hi)))
    }

    fn unsolved(&self, samples: &[DerivedQuantities]) -> SizingError {
        let closest = samples
            .iter()
            .min_by(|a, b| a.imbalance().abs().total_cmp(&b.imbalance().abs()));
        let (closest_diameter, closest_imbalance) =
            closest.map_or((f64::NAN, f64::NAN), |q| (q.diameter, q.imbalance().abs()));

        SizingError::NoEquilibriumFound {
            d_min: self.sweep.d_min,
            d_max: self.sweep.d_max,
            samples: samples.len(),
            tolerance: self.sweep.tolerance,
            closest_diameter,
            closest_imbalance,
        }
    }
}

/// Index `i` of the first sample whose imbalance sign differs from `i - 1`.
fn first_sign_change(samples: &[DerivedQuantities]) -> Option<usize> {
    samples
        .windows(2)
        .position(|w| (w[0].imbalance() > 0.0) != (w[1].imbalance() > 0.0))
        .map(|i| i + 1)
}

fn count_crossings(samples: &[DerivedQuantities]) -> usize {
    samples
        .windows(2)
        .filter(|w| (w[0].imbalance() > 0.0) != (w[1].imbalance() > 0.0))
        .count()
}
