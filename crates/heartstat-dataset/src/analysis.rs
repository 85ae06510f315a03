//! Column-level statistics over a [`Dataset`]

use heartstat_stats::{
    correlation::CorrelationMatrix,
    descriptive::DescriptiveStats,
    moments::{Moments, MomentsError},
    percentiles::Percentiles,
};

use crate::dataset::Dataset;

/// Quartile points reported by [`Dataset::describe`].
pub const QUARTILES: [f64; 3] = [25.0, 50.0, 75.0];

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("column '{name}' not found")]
    ColumnNotFound { name: String },
    #[display("column '{name}' is not numeric")]
    NonNumeric { name: String },
    #[display("cannot compute moments of column '{column}'")]
    Moments { column: String, source: MomentsError },
    #[display("column '{column}' holds {value}, which is not a known code")]
    OutOfDomain { column: String, value: String },
}

/// Summary of one numeric column, as printed by the diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    /// `None` if every cell of the column is missing.
    pub stats: Option<DescriptiveStats>,
    /// Values at [`QUARTILES`]; `NaN` if every cell is missing.
    pub quartiles: Percentiles,
}

impl Dataset {
    /// Numeric view of column `name`, `None` marking missing cells.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ColumnNotFound`] or
    /// [`AnalysisError::NonNumeric`].
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, AnalysisError> {
        let column = self
            .column(name)
            .ok_or_else(|| AnalysisError::ColumnNotFound {
                name: name.to_owned(),
            })?;
        column
            .numeric_values()
            .ok_or_else(|| AnalysisError::NonNumeric {
                name: name.to_owned(),
            })
    }

    /// All numeric columns with their values, in column order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, Vec<Option<f64>>)> + '_ {
        self.columns()
            .iter()
            .filter_map(|c| Some((c.name(), c.numeric_values()?)))
    }

    /// Mean, population standard deviation, skewness and excess kurtosis of
    /// column `name`. Missing cells are skipped.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::ColumnNotFound`] if the column does not exist
    /// - [`AnalysisError::NonNumeric`] if it holds text
    /// - [`AnalysisError::Moments`] if it has fewer than two values
    pub fn moments(&self, name: &str) -> Result<Moments, AnalysisError> {
        let values = self.numeric_column(name)?;
        Moments::new(values.into_iter().flatten()).map_err(|source| AnalysisError::Moments {
            column: name.to_owned(),
            source,
        })
    }

    /// Count, mean, spread and quartiles of every numeric column.
    #[must_use]
    pub fn describe(&self) -> Vec<ColumnSummary> {
        self.numeric_columns()
            .map(|(name, values)| {
                let mut present = values.into_iter().flatten().collect::<Vec<_>>();
                present.sort_by(f64::total_cmp);
                ColumnSummary {
                    name: name.to_owned(),
                    stats: DescriptiveStats::from_sorted(&present),
                    quartiles: Percentiles::from_sorted(&present, &QUARTILES),
                }
            })
            .collect()
    }

    /// Pairwise Pearson correlation of every numeric column.
    #[must_use]
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        let columns = self.numeric_columns().collect::<Vec<_>>();
        CorrelationMatrix::from_columns(
            columns
                .iter()
                .map(|(name, values)| (*name, values.as_slice())),
        )
    }
}
