//! Line chart of mean cholesterol per age decade, one line per disease label

use std::{mem, path::Path};

use heartstat_dataset::{
    Dataset,
    aggregate::{self, GroupedMeans},
    schema::TARGET_LABELS,
};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{FONT, PlotError, TARGET_COLORS};

pub(crate) const FILE_NAME: &str = "relational_plot.png";
pub(super) const SIZE: (u32, u32) = (1000, 600);

pub(crate) fn render(dataset: &Dataset, path: &Path) -> Result<(), PlotError> {
    let means = aggregate::mean_cholesterol_by_age(dataset)?;
    draw(&means, path)
}

#[expect(clippy::cast_precision_loss)]
fn draw(means: &GroupedMeans, path: &Path) -> Result<(), PlotError> {
    let root = super::canvas(path, SIZE)?;

    let num_buckets = means.buckets.len();
    let (y_min, y_max) = y_range(means);
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Mean Cholesterol by Age Group and Heart Disease Status",
            (FONT, 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-0.5..(num_buckets as f64 - 0.5), y_min..y_max)
        .map_err(PlotError::chart_config)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_buckets)
        .x_label_formatter(&|x| super::category_label(&means.buckets, *x))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc("Age Group")
        .y_desc("Mean Cholesterol (mg/dl)")
        .label_style((FONT, 16))
        .draw()
        .map_err(PlotError::drawing)?;

    let value_style =
        TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    for (target, color) in TARGET_COLORS.into_iter().enumerate() {
        let series = means.series(target);
        for segment in segments(series) {
            chart
                .draw_series(LineSeries::new(segment, color.stroke_width(3)))
                .map_err(PlotError::drawing)?;
        }
        chart
            .draw_series(PointSeries::of_element(
                segments(series).into_iter().flatten(),
                5,
                color.filled(),
                &|coord, size, style| {
                    EmptyElement::at(coord)
                        + Circle::new((0, 0), size, style)
                        + Text::new(format!("{:.0}", coord.1), (0, -8), value_style.clone())
                },
            ))
            .map_err(PlotError::drawing)?
            .label(TARGET_LABELS[target])
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 16))
        .draw()
        .map_err(PlotError::drawing)?;

    root.present().map_err(PlotError::drawing)?;
    Ok(())
}

/// Splits a series into runs of defined points so that an empty group shows
/// as a gap in the line instead of a drop to zero.
#[expect(clippy::cast_precision_loss)]
fn segments(series: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut segments = vec![];
    let mut current = vec![];
    for (i, mean) in series.iter().enumerate() {
        match mean {
            Some(mean) => current.push((i as f64, *mean)),
            None if !current.is_empty() => segments.push(mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Y axis bounds with headroom for the value labels above each point.
fn y_range(means: &GroupedMeans) -> (f64, f64) {
    let defined = || means.means.iter().flatten().flatten().copied();
    let (Some(min), Some(max)) = (
        defined().min_by(f64::total_cmp),
        defined().max_by(f64::total_cmp),
    ) else {
        return (0.0, 1.0);
    };
    let pad = ((max - min) * 0.1).max(1.0);
    (min - pad, max + pad * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_leave_gaps() {
        let series = [Some(210.0), None, Some(230.0), Some(250.0), None];
        assert_eq!(
            segments(&series),
            [vec![(0.0, 210.0)], vec![(2.0, 230.0), (3.0, 250.0)]]
        );
        assert!(segments(&[None, None]).is_empty());
    }

    #[test]
    fn test_y_range_contains_every_mean() {
        let means = GroupedMeans {
            buckets: vec!["20-29".to_owned(), "30-39".to_owned()],
            means: [vec![Some(210.0), None], vec![None, Some(300.0)]],
        };
        let (lo, hi) = y_range(&means);
        assert!(lo < 210.0 && hi > 300.0);

        let empty = GroupedMeans {
            buckets: vec![],
            means: [vec![], vec![]],
        };
        assert_eq!(y_range(&empty), (0.0, 1.0));
    }

    #[test]
    fn test_single_value_range_is_not_empty() {
        let means = GroupedMeans {
            buckets: vec!["20-29".to_owned()],
            means: [vec![Some(200.0)], vec![None]],
        };
        let (lo, hi) = y_range(&means);
        assert!(lo < 200.0 && 200.0 < hi);
    }
}
