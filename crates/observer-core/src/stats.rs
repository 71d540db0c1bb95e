//! Sample statistics over binary observation outcomes.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use statrs::statistics::Statistics;

use crate::error::{ObserverError, Result};

/// Mean and standard error of one batch of binary outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepResult {
    /// Fraction of trials that landed on outcome 0, in [0, 1].
    pub mean: f64,
    /// Standard error of the mean: population std / sqrt(n).
    pub standard_error: f64,
}

impl SweepResult {
    /// Reduce 0/1 outcomes to (mean, std / sqrt(n)).
    ///
    /// The spread is the population standard deviation (divisor n, not n-1),
    /// so an all-equal batch has a standard error of exactly zero.
    pub fn from_outcomes(outcomes: &[f64]) -> Result<Self> {
        if outcomes.is_empty() {
            return Err(ObserverError::invalid(
                "sample_count",
                0.0,
                "at least one outcome is required",
            ));
        }
        let n = outcomes.len() as f64;
        let mean = outcomes.iter().mean();
        let std = outcomes.iter().population_std_dev();
        Ok(Self {
            mean,
            standard_error: std / n.sqrt(),
        })
    }

    /// Reduce `successes` out of `trials` Bernoulli draws without materializing them.
    ///
    /// Same result as [`SweepResult::from_outcomes`] on the equivalent 0/1
    /// batch: the population std of a Bernoulli sample is `sqrt(m·(1 − m))`.
    pub fn from_successes(successes: usize, trials: usize) -> Result<Self> {
        if trials == 0 {
            return Err(ObserverError::invalid(
                "sample_count",
                0.0,
                "at least one outcome is required",
            ));
        }
        if successes > trials {
            return Err(ObserverError::invalid(
                "successes",
                successes as f64,
                "cannot exceed the number of trials",
            ));
        }
        let n = trials as f64;
        let mean = successes as f64 / n;
        let variance = (mean * (1.0 - mean)).max(0.0);
        Ok(Self {
            mean,
            standard_error: (variance / n).sqrt(),
        })
    }

    /// Two-sided normal-approximation interval `mean ± z·se` at `level`.
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return Err(ObserverError::invalid(
                "level",
                level,
                "confidence level must lie strictly between 0 and 1",
            ));
        }
        let normal = Normal::new(0.0, 1.0)
            .map_err(|_| ObserverError::invalid("level", level, "standard normal unavailable"))?;
        let z = normal.inverse_cdf(0.5 + level / 2.0);
        let half = z * self.standard_error;
        Ok((self.mean - half, self.mean + half))
    }
}

impl From<SweepResult> for (f64, f64) {
    fn from(r: SweepResult) -> Self {
        (r.mean, r.standard_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ones_has_zero_spread() {
        let r = SweepResult::from_outcomes(&[1.0; 64]).unwrap();
        assert_eq!(r.mean, 1.0);
        assert_eq!(r.standard_error, 0.0);
    }

    #[test]
    fn test_half_split_matches_closed_form() {
        let outcomes: Vec<f64> = (0..100).map(|i| (i % 2) as f64).collect();
        let r = SweepResult::from_outcomes(&outcomes).unwrap();
        assert!((r.mean - 0.5).abs() < 1e-12);
        // population std of a 50/50 split is 0.5
        assert!((r.standard_error - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_single_outcome_is_allowed() {
        let r = SweepResult::from_outcomes(&[0.0]).unwrap();
        assert_eq!(r.mean, 0.0);
        assert_eq!(r.standard_error, 0.0);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        assert!(matches!(
            SweepResult::from_outcomes(&[]),
            Err(ObserverError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_success_count_matches_outcome_batch() {
        for (k, n) in [(0, 10), (10, 10), (37, 100), (1, 3), (512, 1000)] {
            let outcomes: Vec<f64> = (0..n).map(|i| if i < k { 1.0 } else { 0.0 }).collect();
            let a = SweepResult::from_outcomes(&outcomes).unwrap();
            let b = SweepResult::from_successes(k, n).unwrap();
            assert!((a.mean - b.mean).abs() < 1e-12, "k={k} n={n}");
            assert!((a.standard_error - b.standard_error).abs() < 1e-12, "k={k} n={n}");
        }
    }

    #[test]
    fn test_success_count_rejects_bad_input() {
        assert!(SweepResult::from_successes(0, 0).is_err());
        assert!(SweepResult::from_successes(5, 4).is_err());
    }

    #[test]
    fn test_confidence_interval_is_symmetric() {
        let r = SweepResult {
            mean: 0.6,
            standard_error: 0.01,
        };
        let (lo, hi) = r.confidence_interval(0.95).unwrap();
        assert!((0.6 - lo - (hi - 0.6)).abs() < 1e-12);
        assert!((hi - 0.6 - 1.959_964 * 0.01).abs() < 1e-5);
    }

    #[test]
    fn test_confidence_interval_rejects_bad_level() {
        let r = SweepResult {
            mean: 0.5,
            standard_error: 0.1,
        };
        assert!(r.confidence_interval(0.0).is_err());
        assert!(r.confidence_interval(1.0).is_err());
        assert!(r.confidence_interval(f64::NAN).is_err());
    }

    #[test]
    fn test_converts_to_tuple() {
        let r = SweepResult {
            mean: 0.25,
            standard_error: 0.5,
        };
        let (m, se): (f64, f64) = r.into();
        assert_eq!((m, se), (0.25, 0.5));
    }
}
