//! Statistical analysis utilities for the heartstat project.
//!
//! This crate provides a collection of statistical tools including:
//!
//! - **Descriptive statistics**: Calculate count, mean, median, variance, standard deviation, etc.
//! - **Percentiles**: Compute and store linearly interpolated percentile values
//! - **Moments**: Mean, standard deviation, skewness and excess kurtosis
//! - **Correlation**: Pairwise Pearson correlation matrices with missing-value handling
//! - **Binning**: Fixed-width bins for grouping continuous values
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`percentiles`]: Percentile computation and storage
//! - [`moments`]: The four standardized moments of a sample
//! - [`correlation`]: Pearson correlation coefficients and matrices
//! - [`binning`]: Fixed-width bins with labels
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use heartstat_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Computing moments
//!
//! ```
//! use heartstat_stats::moments::Moments;
//!
//! let moments = Moments::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! assert_eq!(moments.mean, 5.0);
//! assert_eq!(moments.std_dev, 2.0);
//! ```
//!
//! ## Grouping values into decades
//!
//! ```
//! use heartstat_stats::binning::FixedWidthBins;
//!
//! let bins = FixedWidthBins::new(20, 10, 5);
//! assert_eq!(bins.bin_of(54.0), Some(3));
//! ```

pub mod binning;
pub mod correlation;
pub mod descriptive;
pub mod moments;
pub mod percentiles;
