//! Cleaning of a freshly loaded dataset
//!
//! [`Dataset::preprocess`] performs three steps in order:
//!
//! 1. drop every row with a missing cell,
//! 2. cast the categorical columns to integers,
//! 3. check the coded domains of the disease label and chest-pain type.
//!
//! Running it on its own output changes nothing.

use std::ops::RangeInclusive;

use crate::{
    dataset::{Dataset, Value},
    schema::{CATEGORICAL_COLUMNS, CODED_DOMAINS},
};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum PreprocessError {
    #[display("categorical column '{name}' is missing")]
    MissingColumn { name: String },
    #[display("cannot cast value '{value}' in column '{column}' (row {row}) to an integer")]
    Cast {
        column: String,
        row: usize,
        value: String,
    },
    #[display("column '{column}' holds code {value}, outside {min}..={max}")]
    OutOfDomain {
        column: String,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl Dataset {
    /// Cleans the dataset for analysis.
    ///
    /// # Errors
    ///
    /// - [`PreprocessError::MissingColumn`] if a categorical column is absent
    /// - [`PreprocessError::Cast`] if a categorical column holds text
    /// - [`PreprocessError::OutOfDomain`] if `target` or `cp` holds an unknown code
    pub fn preprocess(mut self) -> Result<Self, PreprocessError> {
        let before = self.num_rows();
        let dropped = self.drop_missing_rows();
        tracing::info!(
            rows = before,
            dropped,
            remaining = self.num_rows(),
            "dropped rows with missing values"
        );

        for name in CATEGORICAL_COLUMNS {
            self.cast_to_integer(name)?;
        }
        for (name, domain) in CODED_DOMAINS {
            self.check_domain(name, domain)?;
        }

        Ok(self)
    }

    /// Removes every row containing a missing cell and returns how many rows
    /// were removed.
    pub fn drop_missing_rows(&mut self) -> usize {
        let keep = (0..self.num_rows())
            .map(|row| !self.row(row).any(Value::is_missing))
            .collect::<Vec<_>>();
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped > 0 {
            self.retain_rows(&keep);
        }
        dropped
    }

    /// Casts column `name` to integers in place.
    ///
    /// Integers are kept and finite floats are truncated toward zero.
    /// Missing cells are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::Cast`] on the first text (or non-finite)
    /// cell and [`PreprocessError::MissingColumn`] if the column is absent.
    #[expect(clippy::cast_possible_truncation)]
    pub fn cast_to_integer(&mut self, name: &str) -> Result<(), PreprocessError> {
        let column = self
            .column_mut(name)
            .ok_or_else(|| PreprocessError::MissingColumn {
                name: name.to_owned(),
            })?;

        for (row, value) in column.values_mut().iter_mut().enumerate() {
            match value {
                Value::Missing | Value::Int(_) => {}
                Value::Float(v) if v.is_finite() => {
                    let truncated = v.trunc() as i64;
                    *value = Value::Int(truncated);
                }
                Value::Float(_) | Value::Text(_) => {
                    return Err(PreprocessError::Cast {
                        column: name.to_owned(),
                        row,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_domain(
        &self,
        name: &str,
        domain: RangeInclusive<i64>,
    ) -> Result<(), PreprocessError> {
        let column = self
            .column(name)
            .ok_or_else(|| PreprocessError::MissingColumn {
                name: name.to_owned(),
            })?;
        let out_of_domain = column.values().iter().find_map(|value| match value {
            Value::Int(v) if !domain.contains(v) => Some(*v),
            _ => None,
        });
        match out_of_domain {
            Some(value) => Err(PreprocessError::OutOfDomain {
                column: name.to_owned(),
                value,
                min: *domain.start(),
                max: *domain.end(),
            }),
            None => Ok(()),
        }
    }
}
