use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizingError {
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Unknown {kind} technology `{key}`")]
    UnknownTechnology { kind: &'static str, key: String },

    #[error(
        "No equilibrium in [{d_min}, {d_max}] m over {samples} samples (tolerance {tolerance} N); \
         closest sample D={closest_diameter:.3} m with |W-U|={closest_imbalance:.2} N"
    )]
    NoEquilibriumFound {
        d_min: f64,
        d_max: f64,
        samples: usize,
        tolerance: f64,
        closest_diameter: f64,
        closest_imbalance: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SizingResult<T> = Result<T, SizingError>;

/// Reject anything that is not a finite number strictly above zero.
pub(crate) fn require_positive(name: &'static str, value: f64) -> SizingResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SizingError::InvalidParameter { name, value, reason: "must be finite and > 0" })
    }
}

/// Reject negative or non-finite values; zero is allowed.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> SizingResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SizingError::InvalidParameter { name, value, reason: "must be finite and >= 0" })
    }
}
