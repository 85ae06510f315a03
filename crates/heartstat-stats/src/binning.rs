//! Fixed-width binning for grouping continuous values
//!
//! [`FixedWidthBins`] splits the half-open interval `[start, start + width * count)`
//! into `count` equally wide, left-closed bins. Values outside the covered
//! interval belong to no bin.
//!
//! # Examples
//!
//! ```
//! use heartstat_stats::binning::FixedWidthBins;
//!
//! // Decades from 20 up to (but excluding) 70
//! let bins = FixedWidthBins::new(20, 10, 5);
//!
//! assert_eq!(bins.bin_of(20.0), Some(0));
//! assert_eq!(bins.bin_of(29.9), Some(0));
//! assert_eq!(bins.bin_of(30.0), Some(1));
//! assert_eq!(bins.bin_of(69.0), Some(4));
//! assert_eq!(bins.bin_of(70.0), None);
//! assert_eq!(bins.bin_of(19.0), None);
//! assert_eq!(bins.label(1), "30-39");
//! ```

use std::ops::Range;

/// Equally wide, left-closed bins covering `[start, start + width * count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidthBins {
    start: i64,
    width: i64,
    count: usize,
}

impl FixedWidthBins {
    /// Creates `count` bins of `width` starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `width` is not positive.
    #[must_use]
    pub const fn new(start: i64, width: i64, count: usize) -> Self {
        assert!(width > 0, "bin width must be positive");
        Self {
            start,
            width,
            count,
        }
    }

    /// Number of bins.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Exclusive upper edge of the last bin.
    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.start + self.width * self.count as i64
    }

    /// Value range covered by bin `index` (inclusive start, exclusive end).
    #[expect(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn range(&self, index: usize) -> Range<i64> {
        let lo = self.start + self.width * index as i64;
        lo..lo + self.width
    }

    /// Label for bin `index` in the form `lo-hi`, with `hi` the last integer
    /// inside the bin.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        let range = self.range(index);
        format!("{}-{}", range.start, range.end - 1)
    }

    /// Index of the bin containing `value`, or `None` if `value` is outside
    /// every bin (or is `NaN`).
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        let start = self.start as f64;
        let end = self.end() as f64;
        if !(start..end).contains(&value) {
            return None;
        }
        let index = ((value - start) / self.width as f64).floor() as usize;
        Some(index.min(self.count - 1))
    }

    /// Labels of all bins, in order.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.count).map(|i| self.label(i))
    }
}
