//! The first four standardized moments of a distribution
//!
//! [`Moments`] summarizes a sample by its mean, population standard deviation,
//! skewness and excess kurtosis. Skewness and kurtosis use the biased
//! (population) central moments:
//!
//! - skewness: `m3 / m2^1.5`
//! - excess kurtosis: `m4 / m2^2 - 3`, so a normal distribution scores 0
//!
//! where `mk = Σ(x - mean)^k / n`.
//!
//! # Degenerate variance
//!
//! When every value is identical the standardized moments divide by zero.
//! Such samples have no asymmetry and no tails, so both skewness and excess
//! kurtosis are reported as `0.0` instead of `NaN`.
//!
//! # Examples
//!
//! ```
//! use heartstat_stats::moments::Moments;
//!
//! let moments = Moments::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(moments.mean, 3.0);
//! assert_eq!(moments.skewness, 0.0);
//! assert!((moments.excess_kurtosis - (-1.3)).abs() < 1e-12);
//! ```

/// Minimum sample size for which moments are defined.
pub const MIN_SAMPLES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MomentsError {
    #[display("at least {MIN_SAMPLES} values are required to compute moments, got {count}")]
    InsufficientData { count: usize },
}

/// Mean, standard deviation, skewness and excess kurtosis of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    /// Population standard deviation (divides by `n`).
    pub std_dev: f64,
    pub skewness: f64,
    /// Kurtosis minus 3.
    pub excess_kurtosis: f64,
}

impl Moments {
    /// Computes the four moments of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`MomentsError::InsufficientData`] if fewer than
    /// [`MIN_SAMPLES`] values are given.
    #[expect(clippy::cast_precision_loss)]
    pub fn new<I>(values: I) -> Result<Self, MomentsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        let count = values.len();
        if count < MIN_SAMPLES {
            return Err(MomentsError::InsufficientData { count });
        }

        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let (m2, m3, m4) = values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), v| {
            let d = v - mean;
            let d2 = d * d;
            (m2 + d2, m3 + d2 * d, m4 + d2 * d2)
        });
        let (m2, m3, m4) = (m2 / n, m3 / n, m4 / n);

        let std_dev = m2.sqrt();
        // The mean of constant input may be off by rounding, leaving a tiny
        // nonzero m2; decide on the values themselves.
        let is_constant = values.iter().all(|v| *v == values[0]);
        let (skewness, excess_kurtosis) = if is_constant {
            (0.0, 0.0)
        } else {
            (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
        };

        Ok(Self {
            mean,
            std_dev,
            skewness,
            excess_kurtosis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_values() {
        assert_eq!(
            Moments::new(Vec::new()),
            Err(MomentsError::InsufficientData { count: 0 })
        );
        assert_eq!(
            Moments::new([3.0]),
            Err(MomentsError::InsufficientData { count: 1 })
        );
    }

    #[test]
    fn test_identical_values() {
        let moments = Moments::new([54.0; 10]).unwrap();
        assert_eq!(moments.mean, 54.0);
        assert_eq!(moments.std_dev, 0.0);
        assert_eq!(moments.skewness, 0.0);
        assert_eq!(moments.excess_kurtosis, 0.0);
    }

    #[test]
    fn test_identical_values_with_inexact_mean() {
        // 0.1 summed ten times is not exactly 1.0.
        let moments = Moments::new([0.1; 10]).unwrap();
        assert_eq!(moments.skewness, 0.0);
        assert_eq!(moments.excess_kurtosis, 0.0);
    }

    #[test]
    fn test_small_spread_around_large_mean() {
        // Deviations -1, -1, -1, 3: m2 = 3, m3 = 6, m4 = 21.
        let moments = Moments::new([1e15, 1e15, 1e15, 1e15 + 4.0]).unwrap();
        assert_eq!(moments.mean, 1e15 + 1.0);
        assert!((moments.std_dev - 3.0_f64.sqrt()).abs() < 1e-12);
        assert!((moments.skewness - 6.0 / 3.0_f64.powf(1.5)).abs() < 1e-9);
        assert!((moments.excess_kurtosis - (21.0 / 9.0 - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_distribution_has_no_skew() {
        let center = 50.0;
        let offsets = [1.0, 2.5, 4.0, 7.0, 11.0, 18.0];
        let values = offsets
            .iter()
            .flat_map(|o| [center - o, center + o])
            .collect::<Vec<_>>();
        let moments = Moments::new(values).unwrap();
        assert!((moments.mean - center).abs() < 1e-9);
        assert!(moments.skewness.abs() < 0.01);
    }

    #[test]
    fn test_right_skewed() {
        let moments = Moments::new([1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 10.0]).unwrap();
        assert!(moments.skewness > 0.2);
        assert!(moments.excess_kurtosis > 0.2);
    }

    #[test]
    fn test_two_point_distribution() {
        // Two equally likely points: skewness 0, kurtosis 1, excess -2.
        let moments = Moments::new([0.0, 2.0, 0.0, 2.0]).unwrap();
        assert_eq!(moments.mean, 1.0);
        assert_eq!(moments.std_dev, 1.0);
        assert_eq!(moments.skewness, 0.0);
        assert!((moments.excess_kurtosis + 2.0).abs() < 1e-12);
    }
}
