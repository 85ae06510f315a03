//! Grouped aggregates behind the charts
//!
//! - [`mean_cholesterol_by_age`]: mean cholesterol per (age decade, disease label)
//! - [`chest_pain_counts`]: row counts per (chest-pain type, disease label)
//!
//! Both read the disease label from [`TARGET`]; rows whose label is not 0 or
//! 1 are rejected rather than silently dropped.

use heartstat_stats::binning::FixedWidthBins;

use crate::{
    analysis::AnalysisError,
    dataset::Dataset,
    schema::{AGE, CHEST_PAIN_LABELS, CHOL, CP, TARGET, TARGET_LABELS},
};

/// Age decades `20-29` through `60-69`. Ages outside `[20, 70)` fall in no bucket.
pub const AGE_BINS: FixedWidthBins = FixedWidthBins::new(20, 10, 5);

pub const NUM_AGE_BUCKETS: usize = AGE_BINS.len();

/// Number of disease labels (0 = no disease, 1 = disease).
pub const NUM_TARGETS: usize = TARGET_LABELS.len();

/// Number of chest-pain types.
pub const NUM_CHEST_PAIN_TYPES: usize = CHEST_PAIN_LABELS.len();

/// Mean of a measurement per (bucket, disease label).
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedMeans {
    /// Bucket labels, in order.
    pub buckets: Vec<String>,
    /// `means[target][bucket]`; `None` for a group with no rows.
    pub means: [Vec<Option<f64>>; NUM_TARGETS],
}

impl GroupedMeans {
    /// Means of the line for disease label `target`.
    #[must_use]
    pub fn series(&self, target: usize) -> &[Option<f64>] {
        &self.means[target]
    }
}

/// Row counts per (chest-pain type, disease label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChestPainCounts {
    counts: [[usize; NUM_TARGETS]; NUM_CHEST_PAIN_TYPES],
}

impl ChestPainCounts {
    #[must_use]
    pub fn get(&self, chest_pain: usize, target: usize) -> usize {
        self.counts[chest_pain][target]
    }

    /// Largest single count, used to scale the y axis.
    #[must_use]
    pub fn max(&self) -> usize {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Converts a numeric cell to a code index in `0..len`.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn code_index(column: &str, value: f64, len: usize) -> Result<usize, AnalysisError> {
    if value.fract() == 0.0 && value >= 0.0 && (value as usize) < len {
        Ok(value as usize)
    } else {
        Err(AnalysisError::OutOfDomain {
            column: column.to_owned(),
            value: value.to_string(),
        })
    }
}

/// Mean `chol` grouped by [`AGE_BINS`] and disease label.
///
/// Rows with a missing age, cholesterol or label are ignored, as are ages
/// outside every bucket.
///
/// # Errors
///
/// Fails if a required column is absent or non-numeric, or if a label is not
/// 0 or 1.
#[expect(clippy::cast_precision_loss)]
pub fn mean_cholesterol_by_age(dataset: &Dataset) -> Result<GroupedMeans, AnalysisError> {
    let ages = dataset.numeric_column(AGE)?;
    let chols = dataset.numeric_column(CHOL)?;
    let targets = dataset.numeric_column(TARGET)?;

    let mut sums = [[(0.0, 0_usize); NUM_AGE_BUCKETS]; NUM_TARGETS];
    for ((age, chol), target) in ages.iter().zip(&chols).zip(&targets) {
        let (Some(age), Some(chol), Some(target)) = (*age, *chol, *target) else {
            continue;
        };
        let target = code_index(TARGET, target, NUM_TARGETS)?;
        let Some(bucket) = AGE_BINS.bin_of(age) else {
            continue;
        };
        let (sum, count) = &mut sums[target][bucket];
        *sum += chol;
        *count += 1;
    }

    let means = sums.map(|row| {
        row.iter()
            .map(|&(sum, count)| (count > 0).then(|| sum / count as f64))
            .collect()
    });
    Ok(GroupedMeans {
        buckets: AGE_BINS.labels().collect(),
        means,
    })
}

/// Number of rows for each chest-pain type and disease label.
///
/// Rows with a missing chest-pain type or label are ignored.
///
/// # Errors
///
/// Fails if `cp` or `target` is absent or non-numeric, or holds a code
/// outside its domain.
pub fn chest_pain_counts(dataset: &Dataset) -> Result<ChestPainCounts, AnalysisError> {
    let chest_pains = dataset.numeric_column(CP)?;
    let targets = dataset.numeric_column(TARGET)?;

    let mut counts = ChestPainCounts::default();
    for (chest_pain, target) in chest_pains.iter().zip(&targets) {
        let (Some(chest_pain), Some(target)) = (*chest_pain, *target) else {
            continue;
        };
        let chest_pain = code_index(CP, chest_pain, NUM_CHEST_PAIN_TYPES)?;
        let target = code_index(TARGET, target, NUM_TARGETS)?;
        counts.counts[chest_pain][target] += 1;
    }
    Ok(counts)
}
