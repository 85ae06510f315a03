//! Tables printed before cleaning: head, description, correlation matrix

use std::io::{self, Write};

use heartstat_dataset::{ColumnSummary, Dataset};
use heartstat_stats::correlation::CorrelationMatrix;

/// Number of rows shown under `Dataset Head:`.
const HEAD_ROWS: usize = 5;

const RULE_WIDTH: usize = 48;

/// Narrowest column of the description and correlation tables.
const MIN_NUMBER_WIDTH: usize = 10;

pub(super) fn print<W>(out: &mut W, dataset: &Dataset) -> io::Result<()>
where
    W: Write,
{
    print_heading(out, "Dataset Head:")?;
    print_head(out, &dataset.head(HEAD_ROWS))?;
    writeln!(out)?;

    print_heading(out, "Dataset Description:")?;
    print_description(out, &dataset.describe())?;
    writeln!(out)?;

    print_heading(out, "Correlation Matrix:")?;
    print_correlation(out, &dataset.correlation_matrix())
}

fn print_heading<W>(out: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn print_head<W>(out: &mut W, head: &Dataset) -> io::Result<()>
where
    W: Write,
{
    let index_width = head.num_rows().saturating_sub(1).to_string().len();
    let cells = head
        .columns()
        .iter()
        .map(|column| {
            column
                .values()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let widths = head
        .column_names()
        .zip(&cells)
        .map(|(name, cells)| cells.iter().map(String::len).fold(name.len(), usize::max))
        .collect::<Vec<_>>();

    write!(out, "{:index_width$}", "")?;
    for (name, &width) in head.column_names().zip(&widths) {
        write!(out, "  {name:>width$}")?;
    }
    writeln!(out)?;

    for row in 0..head.num_rows() {
        write!(out, "{row:<index_width$}")?;
        for (cells, &width) in cells.iter().zip(&widths) {
            write!(out, "  {:>width$}", cells[row])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn print_description<W>(out: &mut W, summaries: &[ColumnSummary]) -> io::Result<()>
where
    W: Write,
{
    let rows: [(&str, fn(&ColumnSummary) -> f64); 8] = [
        ("count", |s| s.stats.as_ref().map_or(0.0, |st| st.count as f64)),
        ("mean", |s| s.stats.as_ref().map_or(f64::NAN, |st| st.mean)),
        ("std", |s| {
            s.stats.as_ref().map_or(f64::NAN, |st| st.sample_std_dev)
        }),
        ("min", |s| s.stats.as_ref().map_or(f64::NAN, |st| st.min)),
        ("25%", |s| quartile(s, 25.0)),
        ("50%", |s| quartile(s, 50.0)),
        ("75%", |s| quartile(s, 75.0)),
        ("max", |s| s.stats.as_ref().map_or(f64::NAN, |st| st.max)),
    ];
    let widths = summaries
        .iter()
        .map(|s| s.name.len().max(MIN_NUMBER_WIDTH))
        .collect::<Vec<_>>();

    write!(out, "{:5}", "")?;
    for (summary, &width) in summaries.iter().zip(&widths) {
        write!(out, "  {:>width$}", summary.name)?;
    }
    writeln!(out)?;

    for (label, value_of) in rows {
        write!(out, "{label:<5}")?;
        for (summary, &width) in summaries.iter().zip(&widths) {
            write!(out, "  {:>width$.6}", value_of(summary))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn quartile(summary: &ColumnSummary, percentile: f64) -> f64 {
    summary.quartiles.get(percentile).unwrap_or(f64::NAN)
}

fn print_correlation<W>(out: &mut W, matrix: &CorrelationMatrix) -> io::Result<()>
where
    W: Write,
{
    let label_width = matrix.names().iter().map(String::len).max().unwrap_or(0);
    let widths = matrix
        .names()
        .iter()
        .map(|name| name.len().max(MIN_NUMBER_WIDTH))
        .collect::<Vec<_>>();

    write!(out, "{:label_width$}", "")?;
    for (name, &width) in matrix.names().iter().zip(&widths) {
        write!(out, "  {name:>width$}")?;
    }
    writeln!(out)?;

    for (name, values) in matrix.rows() {
        write!(out, "{name:<label_width$}")?;
        for (value, &width) in values.iter().zip(&widths) {
            write!(out, "  {value:>width$.6}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
