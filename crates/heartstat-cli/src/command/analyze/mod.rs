//! The full pipeline: load, diagnose, clean, chart, report
//!
//! ```text
//! heart.csv ──▶ Dataset ──▶ diagnostics (stdout)
//!                  │
//!                  ▼ preprocess
//!               Dataset ──▶ relational / statistical / categorical PNGs
//!                  │
//!                  ▼ moments
//!               report (stdout)
//! ```
//!
//! Stages run in this order and the first failure aborts the run.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use heartstat_dataset::{Dataset, schema};

use crate::{plot, report};

mod diagnostics;

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Input CSV file
    #[arg(default_value = "heart.csv")]
    pub(crate) input: PathBuf,
    /// Directory the charts are written to
    #[arg(long, default_value = ".")]
    pub(crate) output_dir: PathBuf,
    /// Numeric column summarized by the moment report
    #[arg(long, default_value = schema::AGE)]
    pub(crate) column: String,
}

impl Default for AnalyzeArg {
    fn default() -> Self {
        Self {
            input: PathBuf::from("heart.csv"),
            output_dir: PathBuf::from("."),
            column: schema::AGE.to_owned(),
        }
    }
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    analyze(arg, &mut out)
}

fn analyze<W>(arg: &AnalyzeArg, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let AnalyzeArg {
        input,
        output_dir,
        column,
    } = arg;

    let dataset = Dataset::from_csv_path(input)
        .with_context(|| format!("failed to load dataset from {}", input.display()))?;
    tracing::info!(
        rows = dataset.num_rows(),
        columns = dataset.num_columns(),
        "loaded {}",
        input.display()
    );

    diagnostics::print(out, &dataset).context("failed to print diagnostics")?;

    let dataset = dataset
        .preprocess()
        .context("failed to preprocess dataset")?;

    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            output_dir.display()
        )
    })?;
    for chart in plot::CHARTS {
        let path = output_dir.join(chart.file_name);
        (chart.render)(&dataset, &path)
            .with_context(|| format!("failed to render the {} plot", chart.name))?;
        tracing::info!(path = %path.display(), "saved {} plot", chart.name);
    }

    let moments = dataset
        .moments(column)
        .with_context(|| format!("failed to compute moments of '{column}'"))?;
    tracing::debug!(?moments, column = %column, "computed moments");
    report::write_report(out, column, &moments).context("failed to write report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use heartstat_dataset::{LoadError, PreprocessError};

    use super::*;

    const HEADER: &str = "age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target";

    fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join("heart.csv");
        let mut text = format!("{HEADER}\n");
        for row in rows {
            text.push_str(row);
            text.push('\n');
        }
        fs::write(&path, text).unwrap();
        path
    }

    fn png_files(dir: &Path) -> Vec<PathBuf> {
        if !dir.exists() {
            return vec![];
        }
        fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
            .collect()
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let arg = AnalyzeArg {
            input: dir.path().join("missing.csv"),
            output_dir: dir.path().join("out"),
            column: schema::AGE.to_owned(),
        };
        let mut out = Vec::new();

        let err = analyze(&arg, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::NotFound { .. })
        ));
        assert!(out.is_empty());
        assert!(!arg.output_dir.exists());
        assert!(png_files(dir.path()).is_empty());
    }

    #[test]
    fn test_invalid_label_stops_before_plots() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            &[
                "63,1,3,145,233,1,0,150,0,2.3,0,0,1,1",
                "37,1,2,130,250,0,1,187,0,3.5,0,0,2,2",
            ],
        );
        let arg = AnalyzeArg {
            input,
            output_dir: dir.path().to_owned(),
            column: schema::AGE.to_owned(),
        };
        let mut out = Vec::new();

        let err = analyze(&arg, &mut out).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PreprocessError>(),
            Some(PreprocessError::OutOfDomain { .. })
        ));
        // Diagnostics run on the raw data, before cleaning fails.
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Dataset Head:"));
        assert!(!text.contains("For the attribute"));
        assert!(png_files(dir.path()).is_empty());
    }

    #[test]
    fn test_full_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            &[
                "63,1,3,145,233,1,0,150,0,2.3,0,0,1,1",
                "37,1,2,130,250,0,1,187,0,3.5,0,0,2,1",
                "41,0,1,130,204,0,0,172,0,1.4,2,0,2,1",
                "56,1,1,120,236,0,1,178,0,0.8,2,0,2,1",
                "57,0,0,120,354,0,1,163,1,0.6,2,0,2,0",
                "57,1,0,140,192,0,1,148,0,0.4,1,0,1,0",
                "56,0,1,140,,0,0,153,0,1.3,1,0,2,1",
                "44,1,1,120,263,0,1,173,0,0,2,0,3,0",
            ],
        );
        let arg = AnalyzeArg {
            input,
            output_dir: dir.path().join("charts"),
            column: schema::AGE.to_owned(),
        };
        let mut out = Vec::new();

        analyze(&arg, &mut out).unwrap();

        for chart in plot::CHARTS {
            assert!(arg.output_dir.join(chart.file_name).is_file(), "{}", chart.name);
        }
        assert_eq!(png_files(&arg.output_dir).len(), 3);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Correlation Matrix:"));
        assert!(text.contains("For the attribute age:"));
    }
}
