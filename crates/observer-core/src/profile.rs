//! Closed-form companion curves for the observer model.
//!
//! - cognitive dimension `2 / (1 + |d|²)` as a function of distinguishability,
//! - resolution curves over the cognitive resolution ε:
//!   `p(ε) = ½ + ½·e^(−10ε)`, its binary entropy, and trace distance `1 − e^(−5ε)`.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{ObserverError, Result};

/// `points` evenly spaced values from `start` to `end`, both ends included.
///
/// A single point yields `[start]`.
pub fn linspace(start: f64, end: f64, points: usize) -> Result<Vec<f64>> {
    if points == 0 {
        return Err(ObserverError::invalid("points", 0.0, "must be > 0"));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(ObserverError::invalid(
            "range",
            if start.is_finite() { end } else { start },
            "grid endpoints must be finite",
        ));
    }
    if points == 1 {
        return Ok(vec![start]);
    }
    let step = (end - start) / (points - 1) as f64;
    let mut values: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
    // pin the endpoint exactly
    values[points - 1] = end;
    Ok(values)
}

/// Effective cognitive dimension for amplitude `re + i·im`.
pub fn cognitive_dimension(amplitude_re: f64, amplitude_im: f64) -> f64 {
    2.0 / (1.0 + Complex64::new(amplitude_re, amplitude_im).norm_sqr())
}

/// Binary Shannon entropy in bits; zero at the certain endpoints.
pub fn binary_entropy(p: f64) -> f64 {
    let term = |x: f64| if x <= 0.0 { 0.0 } else { -x * x.log2() };
    term(p) + term(1.0 - p)
}

/// One sample of the cognitive dimension curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionPoint {
    pub distinguishability: f64,
    pub dimension: f64,
}

/// Cognitive dimension for each real distinguishability in `values`.
pub fn dimension_profile(values: &[f64]) -> Vec<DimensionPoint> {
    values
        .iter()
        .map(|&d| DimensionPoint {
            distinguishability: d,
            dimension: cognitive_dimension(d, 0.0),
        })
        .collect()
}

/// Outcome probability, entropy, and trace distance at one resolution ε.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolutionPoint {
    pub epsilon: f64,
    pub probability: f64,
    pub entropy: f64,
    pub trace_distance: f64,
}

pub fn resolution_point(epsilon: f64) -> ResolutionPoint {
    let probability = 0.5 + 0.5 * (-10.0 * epsilon).exp();
    ResolutionPoint {
        epsilon,
        probability,
        entropy: binary_entropy(probability),
        trace_distance: 1.0 - (-5.0 * epsilon).exp(),
    }
}

pub fn resolution_profile(epsilons: &[f64]) -> Vec<ResolutionPoint> {
    epsilons.iter().map(|&e| resolution_point(e)).collect()
}
