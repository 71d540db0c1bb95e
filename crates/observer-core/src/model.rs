//! The observer's statistical model.
//!
//! An observer is described by a complex distinguishability amplitude `d`
//! between its two "observation" basis states and a classical error rate
//! `p_err` that flips either outcome symmetrically. Nothing here simulates a
//! Hilbert space: the quantum vocabulary labels a classical two-outcome
//! probability model.
//!
//! ```text
//! effective distinguishability = |d| · (1 − 2·p_err)
//! p0        = ½ · (1 + Re d)
//! p_eff     = p0 · (1 − p_err) + (1 − p0) · p_err
//! ```

use num_complex::Complex64;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ObserverError, Result};
use crate::profile;
use crate::stats::SweepResult;

/// Critical distinguishability scale Λc used when the caller has no preference.
pub const DEFAULT_CRITICAL_SCALE: f64 = 4.6;

/// Trials per interference-pattern estimate used when the caller has no preference.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Observer state: distinguishability amplitude plus classical error rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalModel {
    amplitude: Complex64,
    error_probability: f64,
}

impl Default for StatisticalModel {
    fn default() -> Self {
        Self {
            amplitude: Complex64::new(0.0, 0.0),
            error_probability: 0.0,
        }
    }
}

impl StatisticalModel {
    /// Build a model without range checks.
    ///
    /// Unphysical states (`|d| > 1`, `p_err ∉ [0, 1]`) are accepted so that
    /// out-of-range behavior can still be explored; they are logged at `warn`.
    /// Use [`StatisticalModel::validated`] to reject them instead.
    pub fn new(amplitude_re: f64, amplitude_im: f64, error_probability: f64) -> Self {
        let model = Self {
            amplitude: Complex64::new(amplitude_re, amplitude_im),
            error_probability,
        };
        if let Err(e) = model.check_physical() {
            log::warn!("constructing unphysical observer model: {e}");
        }
        model
    }

    /// Build a model, rejecting non-finite parts, `|d| > 1`, and `p_err ∉ [0, 1]`.
    pub fn validated(amplitude_re: f64, amplitude_im: f64, error_probability: f64) -> Result<Self> {
        let model = Self {
            amplitude: Complex64::new(amplitude_re, amplitude_im),
            error_probability,
        };
        model.check_physical()?;
        Ok(model)
    }

    /// Check the current state against the physically interpretable ranges.
    pub fn check_physical(&self) -> Result<()> {
        if !self.amplitude.re.is_finite() {
            return Err(ObserverError::out_of_range("amplitude.re", self.amplitude.re, "finite"));
        }
        if !self.amplitude.im.is_finite() {
            return Err(ObserverError::out_of_range("amplitude.im", self.amplitude.im, "finite"));
        }
        let magnitude = self.amplitude.norm();
        if magnitude > 1.0 {
            return Err(ObserverError::out_of_range("|amplitude|", magnitude, "[0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.error_probability) {
            return Err(ObserverError::out_of_range(
                "error_probability",
                self.error_probability,
                "[0, 1]",
            ));
        }
        Ok(())
    }

    pub fn amplitude(&self) -> Complex64 {
        self.amplitude
    }

    pub fn error_probability(&self) -> f64 {
        self.error_probability
    }

    /// Overwrite the amplitude in place. The error probability is fixed at
    /// construction and has no setter.
    pub fn set_amplitude(&mut self, amplitude: Complex64) {
        self.amplitude = amplitude;
    }

    /// Copy of this model with a different amplitude.
    pub fn with_amplitude(&self, amplitude: Complex64) -> Self {
        Self {
            amplitude,
            error_probability: self.error_probability,
        }
    }

    /// `|d| · (1 − 2·p_err)`.
    ///
    /// Not clamped: negative whenever `p_err > 0.5`.
    pub fn effective_distinguishability(&self) -> f64 {
        self.amplitude.norm() * (1.0 - 2.0 * self.error_probability)
    }

    /// Distinguishability threshold `1/Λc` below which the observer behaves unitarily.
    ///
    /// `Λc = +∞` gives a threshold of zero, so only a negative effective
    /// distinguishability stays unitary.
    pub fn critical_threshold(critical_scale: f64) -> Result<f64> {
        if critical_scale == 0.0 {
            return Err(ObserverError::invalid(
                "critical_scale",
                critical_scale,
                "threshold 1/Λc is undefined at zero",
            ));
        }
        if critical_scale.is_nan() || critical_scale < 0.0 {
            return Err(ObserverError::invalid("critical_scale", critical_scale, "must be > 0"));
        }
        Ok(1.0 / critical_scale)
    }

    /// `1.0` when the observer does not collapse the state, `0.0` otherwise.
    ///
    /// Strict comparison: an effective distinguishability exactly equal to
    /// `1/Λc` collapses.
    pub fn collapse_predicate(&self, critical_scale: f64) -> Result<f64> {
        Ok(if self.is_unitary(critical_scale)? {
            1.0
        } else {
            0.0
        })
    }

    /// Boolean form of [`StatisticalModel::collapse_predicate`].
    pub fn is_unitary(&self, critical_scale: f64) -> Result<bool> {
        let threshold = Self::critical_threshold(critical_scale)?;
        Ok(self.effective_distinguishability() < threshold)
    }

    /// Ideal probability of outcome 0, before classical error: `½·(1 + Re d)`.
    pub fn ideal_outcome_probability(&self) -> f64 {
        0.5 * (1.0 + self.amplitude.re)
    }

    /// Probability of observing outcome 0 once symmetric misclassification is mixed in.
    pub fn effective_outcome_probability(&self) -> f64 {
        let p0 = self.ideal_outcome_probability();
        let e = self.error_probability;
        p0 * (1.0 - e) + (1.0 - p0) * e
    }

    /// Effective dimension of the observer's cognitive space, `2 / (1 + |d|²)`.
    ///
    /// Two for a fully indistinguishable observer, one for a perfectly
    /// distinguishing one.
    pub fn cognitive_dimension(&self) -> f64 {
        profile::cognitive_dimension(self.amplitude.re, self.amplitude.im)
    }

    /// Draw `sample_count` independent Bernoulli(p_eff) trials and return
    /// their mean and standard error.
    ///
    /// The model is only borrowed; the randomness source is owned by the caller
    /// and can be swapped or reseeded freely.
    pub fn interference_pattern<R: Rng + ?Sized>(
        &self,
        sample_count: usize,
        rng: &mut R,
    ) -> Result<SweepResult> {
        if sample_count == 0 {
            return Err(ObserverError::invalid("sample_count", 0.0, "must be > 0"));
        }
        let p_eff = self.effective_outcome_probability();
        let trial = Bernoulli::new(p_eff)
            .map_err(|_| ObserverError::out_of_range("p_eff", p_eff, "[0, 1]"))?;

        let successes = (0..sample_count).filter(|_| trial.sample(rng)).count();
        SweepResult::from_successes(successes, sample_count)
    }

    /// [`StatisticalModel::interference_pattern`] with an optional fixed seed.
    ///
    /// `Some(seed)` is fully reproducible; `None` draws from the thread-local generator.
    pub fn interference_pattern_seeded(
        &self,
        sample_count: usize,
        seed: Option<u64>,
    ) -> Result<SweepResult> {
        match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.interference_pattern(sample_count, &mut rng)
            }
            None => self.interference_pattern(sample_count, &mut rand::rng()),
        }
    }
}
