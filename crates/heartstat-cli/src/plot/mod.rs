//! PNG charts of the cleaned dataset
//!
//! Each chart module exposes `FILE_NAME` and a `render` function that
//! aggregates the dataset, draws on its own [`BitMapBackend`] and presents it.
//! The drawing area lives only inside `render`, so nothing is shared between
//! charts.

use std::{fmt, path::Path, sync::OnceLock};

use heartstat_dataset::{AnalysisError, Dataset, aggregate::NUM_TARGETS};
use plotters::{coord::Shift, prelude::*};

pub(crate) mod categorical;
pub(crate) mod relational;
pub(crate) mod statistical;

const FONT: &str = "sans-serif";

/// DejaVu Sans, registered as [`FONT`] before the first chart is drawn.
static FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Line and bar colors of the disease labels, indexed by code.
const TARGET_COLORS: [RGBColor; NUM_TARGETS] = [RGBColor(31, 119, 180), RGBColor(214, 39, 40)];

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub(crate) enum PlotError {
    #[display("bundled chart font is not a valid TrueType font")]
    Font,
    #[display("cannot aggregate chart data")]
    Data { source: AnalysisError },
    #[display("failed to prepare the drawing area: {message}")]
    DrawingArea { message: String },
    #[display("failed to configure the chart: {message}")]
    ChartConfig { message: String },
    #[display("failed to draw chart elements: {message}")]
    Drawing { message: String },
}

impl PlotError {
    fn drawing_area(err: impl fmt::Display) -> Self {
        Self::DrawingArea {
            message: err.to_string(),
        }
    }

    fn chart_config(err: impl fmt::Display) -> Self {
        Self::ChartConfig {
            message: err.to_string(),
        }
    }

    fn drawing(err: impl fmt::Display) -> Self {
        Self::Drawing {
            message: err.to_string(),
        }
    }
}

impl From<AnalysisError> for PlotError {
    fn from(source: AnalysisError) -> Self {
        Self::Data { source }
    }
}

type Render = fn(&Dataset, &Path) -> Result<(), PlotError>;

/// A chart written by the pipeline.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chart {
    pub(crate) name: &'static str,
    pub(crate) file_name: &'static str,
    pub(crate) render: Render,
}

/// Charts in the order they are rendered.
pub(crate) const CHARTS: [Chart; 3] = [
    Chart {
        name: "relational",
        file_name: relational::FILE_NAME,
        render: relational::render,
    },
    Chart {
        name: "statistical",
        file_name: statistical::FILE_NAME,
        render: statistical::render,
    },
    Chart {
        name: "categorical",
        file_name: categorical::FILE_NAME,
        render: categorical::render,
    },
];

fn register_font() -> Result<(), PlotError> {
    static REGISTERED: OnceLock<bool> = OnceLock::new();
    let registered = *REGISTERED
        .get_or_init(|| plotters::style::register_font(FONT, FontStyle::Normal, FONT_DATA).is_ok());
    if registered {
        Ok(())
    } else {
        Err(PlotError::Font)
    }
}

/// Opens a white canvas that is written to `path` on `present()`.
fn canvas(path: &Path, size: (u32, u32)) -> Result<DrawingArea<BitMapBackend<'_>, Shift>, PlotError> {
    register_font()?;
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(PlotError::drawing_area)?;
    Ok(root)
}

/// Label of the category drawn at `x` on a categorical axis where category
/// `i` sits at `x == i`. Positions between categories get no label.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn category_label<S>(labels: &[S], x: f64) -> String
where
    S: AsRef<str>,
{
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels
        .get(index as usize)
        .map(|label| label.as_ref().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const CSV: &str = "\
age,sex,cp,trestbps,chol,fbs,restecg,thalach,exang,oldpeak,slope,ca,thal,target
63,1,3,145,233,1,0,150,0,2.3,0,0,1,1
37,1,2,130,250,0,1,187,0,3.5,0,0,2,1
41,0,1,130,204,0,0,172,0,1.4,2,0,2,1
56,1,1,120,236,0,1,178,0,0.8,2,0,2,1
57,0,0,120,354,0,1,163,1,0.6,2,0,2,0
57,1,0,140,192,0,1,148,0,0.4,1,0,1,0
44,1,1,120,263,0,1,173,0,0,2,0,3,0
";

    fn png_size(path: &Path) -> (u32, u32) {
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    fn render_all(dataset: &Dataset) {
        let dir = tempfile::tempdir().unwrap();
        let sizes = [relational::SIZE, statistical::SIZE, categorical::SIZE];
        for (chart, size) in CHARTS.into_iter().zip(sizes) {
            let path = dir.path().join(chart.file_name);
            (chart.render)(dataset, &path).unwrap();
            assert_eq!(png_size(&path), size, "{}", chart.name);
        }
    }

    #[test]
    fn test_render_every_chart() {
        // `ca` is constant here, so the heatmap also draws undefined cells.
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap().preprocess().unwrap();
        render_all(&dataset);
    }

    #[test]
    fn test_render_without_rows() {
        let header = CSV.lines().next().unwrap();
        let dataset = Dataset::from_reader(header.as_bytes()).unwrap().preprocess().unwrap();
        render_all(&dataset);
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = Dataset::from_reader(CSV.as_bytes()).unwrap().preprocess().unwrap();
        let path = dir.path().join("missing").join(relational::FILE_NAME);
        let err = relational::render(&dataset, &path).unwrap_err();
        assert!(matches!(err, PlotError::Drawing { .. }), "{err}");
        assert!(!path.exists());
    }

    #[test]
    fn test_category_label() {
        let labels = ["a", "b", "c"];
        assert_eq!(category_label(&labels, 0.0), "a");
        assert_eq!(category_label(&labels, 2.000_000_1), "c");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 3.0), "");
    }

    #[test]
    fn test_chart_files_are_distinct_pngs() {
        let names = CHARTS.map(|c| c.file_name);
        assert_eq!(
            names,
            [
                "relational_plot.png",
                "statistical_plot.png",
                "categorical_plot.png"
            ]
        );
    }
}
