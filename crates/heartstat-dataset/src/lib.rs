//! Heart-disease dataset loading, cleaning and aggregation
//!
//! This crate turns a `heart.csv` file into an analysis-ready [`Dataset`]
//! and computes the figures behind every chart and report of the `heartstat`
//! binary.
//!
//! # Overview
//!
//! 1. **Load** ([`Dataset::from_csv_path`]): read the CSV, check the header
//!    against [`schema::REQUIRED_COLUMNS`]
//! 2. **Clean** ([`Dataset::preprocess`]): drop incomplete rows, cast
//!    categorical columns to integers, validate coded domains
//! 3. **Analyze**:
//!    - [`Dataset::describe`] and [`Dataset::correlation_matrix`] for diagnostics
//!    - [`Dataset::moments`] for the four-moment summary of one column
//!    - [`aggregate`] for the grouped figures behind the charts
//!
//! # Examples
//!
//! ```
//! use heartstat_dataset::{Dataset, aggregate};
//!
//! let csv = "\
//! age,sex,cp,chol,fbs,restecg,exang,slope,ca,thal,target
//! 25,1,0,200,0,0,0,1,0,2,0
//! 28,0,1,220,0,0,0,1,0,2,0
//! 34,1,2,240,0,1,0,1,0,2,1
//! ";
//! let dataset = Dataset::from_reader(csv.as_bytes())?.preprocess()?;
//!
//! let means = aggregate::mean_cholesterol_by_age(&dataset)?;
//! assert_eq!(means.series(0)[0], Some(210.0));
//!
//! let moments = dataset.moments("age")?;
//! assert!((moments.mean - 29.0).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    analysis::{AnalysisError, ColumnSummary},
    dataset::{Column, ColumnType, Dataset, Value},
    loader::LoadError,
    preprocess::PreprocessError,
};

pub mod aggregate;
pub mod analysis;
pub mod dataset;
pub mod loader;
pub mod preprocess;
pub mod schema;
