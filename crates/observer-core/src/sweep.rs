//! Distinguishability-scale sweeps.
//!
//! A sweep evaluates the observer at each Λ in a grid, setting the amplitude
//! to the real value `1/Λ` and sampling the interference pattern once per
//! point. Two flavors:
//!
//! - [`run_sweep`] reconfigures one model in place. The model is left at the
//!   last swept amplitude, and each step depends on the previous one having
//!   finished, so it is strictly sequential.
//! - [`sweep`] maps the grid to fresh snapshot models and never mutates the
//!   base. Given the same randomness source it returns exactly the same
//!   results as [`run_sweep`].

use num_complex::Complex64;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ObserverError, Result};
use crate::model::{DEFAULT_SAMPLE_COUNT, StatisticalModel};
use crate::stats::SweepResult;

/// Real amplitude `1/Λ` for the scale at `index`.
///
/// Subnormal Λ are rejected too: their reciprocal overflows to infinity.
fn reciprocal_amplitude(index: usize, lambda: f64) -> Result<Complex64> {
    if lambda == 0.0 {
        return Err(ObserverError::ZeroScaleValue { index });
    }
    if lambda.is_nan() {
        return Err(ObserverError::invalid("scale_value", lambda, "scale values must not be NaN"));
    }
    let re = 1.0 / lambda;
    if !re.is_finite() {
        log::debug!("scale value {lambda:e} at index {index} has no finite reciprocal");
        return Err(ObserverError::invalid(
            "scale_value",
            lambda,
            "1/Λ overflows; scale value is too close to zero",
        ));
    }
    Ok(Complex64::new(re, 0.0))
}

fn check_samples(samples_per_point: usize) -> Result<()> {
    if samples_per_point == 0 {
        return Err(ObserverError::invalid("samples_per_point", 0.0, "must be > 0"));
    }
    Ok(())
}

/// Sweep `model` across `scale_values` in place.
///
/// On error the model keeps whatever amplitude the last successful step set;
/// a zero, NaN, or subnormal scale is rejected before the amplitude for that
/// step is written, so the amplitude always stays finite.
pub fn run_sweep<R: Rng + ?Sized>(
    model: &mut StatisticalModel,
    scale_values: &[f64],
    samples_per_point: usize,
    rng: &mut R,
) -> Result<Vec<SweepResult>> {
    run_sweep_inspect(model, scale_values, samples_per_point, rng, |_, _, _| {})
}

/// [`run_sweep`], calling `inspect(index, model, result)` after every step.
pub fn run_sweep_inspect<R, F>(
    model: &mut StatisticalModel,
    scale_values: &[f64],
    samples_per_point: usize,
    rng: &mut R,
    mut inspect: F,
) -> Result<Vec<SweepResult>>
where
    R: Rng + ?Sized,
    F: FnMut(usize, &StatisticalModel, &SweepResult),
{
    check_samples(samples_per_point)?;
    let mut results = Vec::with_capacity(scale_values.len());
    for (index, &lambda) in scale_values.iter().enumerate() {
        let amplitude = reciprocal_amplitude(index, lambda)?;
        model.set_amplitude(amplitude);
        let result = model.interference_pattern(samples_per_point, rng)?;
        log::debug!(
            "sweep step {index}: lambda={lambda:.4} mean={:.4} se={:.4}",
            result.mean,
            result.standard_error
        );
        inspect(index, model, &result);
        results.push(result);
    }
    Ok(results)
}

/// Sweep snapshots of `base` across `scale_values` without mutating it.
///
/// The whole grid is validated before any sampling happens.
pub fn sweep<R: Rng + ?Sized>(
    base: &StatisticalModel,
    scale_values: &[f64],
    samples_per_point: usize,
    rng: &mut R,
) -> Result<Vec<SweepResult>> {
    sweep_inspect(base, scale_values, samples_per_point, rng, |_, _, _| {})
}

/// [`sweep`], calling `inspect(index, snapshot, result)` for every point.
pub fn sweep_inspect<R, F>(
    base: &StatisticalModel,
    scale_values: &[f64],
    samples_per_point: usize,
    rng: &mut R,
    mut inspect: F,
) -> Result<Vec<SweepResult>>
where
    R: Rng + ?Sized,
    F: FnMut(usize, &StatisticalModel, &SweepResult),
{
    check_samples(samples_per_point)?;
    let snapshots = scale_values
        .iter()
        .enumerate()
        .map(|(index, &lambda)| reciprocal_amplitude(index, lambda).map(|a| base.with_amplitude(a)))
        .collect::<Result<Vec<_>>>()?;

    let mut results = Vec::with_capacity(snapshots.len());
    for (index, snapshot) in snapshots.iter().enumerate() {
        let result = snapshot.interference_pattern(samples_per_point, rng)?;
        inspect(index, snapshot, &result);
        results.push(result);
    }
    Ok(results)
}

/// Reusable sweep settings: samples per point and an optional fixed seed.
///
/// A fresh generator is built for every call, so a seeded runner returns the
/// same output each time it is run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRunner {
    pub samples_per_point: usize,
    pub seed: Option<u64>,
}

impl Default for SweepRunner {
    fn default() -> Self {
        Self {
            samples_per_point: DEFAULT_SAMPLE_COUNT,
            seed: None,
        }
    }
}

impl SweepRunner {
    pub fn new(samples_per_point: usize) -> Self {
        Self {
            samples_per_point,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// In-place sweep; see [`run_sweep`].
    pub fn run(
        &self,
        model: &mut StatisticalModel,
        scale_values: &[f64],
    ) -> Result<Vec<SweepResult>> {
        run_sweep(model, scale_values, self.samples_per_point, &mut self.rng())
    }

    pub fn run_inspect<F>(
        &self,
        model: &mut StatisticalModel,
        scale_values: &[f64],
        inspect: F,
    ) -> Result<Vec<SweepResult>>
    where
        F: FnMut(usize, &StatisticalModel, &SweepResult),
    {
        run_sweep_inspect(
            model,
            scale_values,
            self.samples_per_point,
            &mut self.rng(),
            inspect,
        )
    }

    /// Snapshot sweep; see [`sweep`].
    pub fn map(&self, base: &StatisticalModel, scale_values: &[f64]) -> Result<Vec<SweepResult>> {
        sweep(base, scale_values, self.samples_per_point, &mut self.rng())
    }

    pub fn map_inspect<F>(
        &self,
        base: &StatisticalModel,
        scale_values: &[f64],
        inspect: F,
    ) -> Result<Vec<SweepResult>>
    where
        F: FnMut(usize, &StatisticalModel, &SweepResult),
    {
        sweep_inspect(
            base,
            scale_values,
            self.samples_per_point,
            &mut self.rng(),
            inspect,
        )
    }
}
