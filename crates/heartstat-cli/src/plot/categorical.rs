//! Grouped bar chart of patient counts per chest-pain type and disease label

use std::path::Path;

use heartstat_dataset::{
    Dataset,
    aggregate::{self, ChestPainCounts, NUM_CHEST_PAIN_TYPES},
    schema::{CHEST_PAIN_LABELS, TARGET_LABELS},
};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{FONT, PlotError, TARGET_COLORS};

pub(crate) const FILE_NAME: &str = "categorical_plot.png";
pub(super) const SIZE: (u32, u32) = (1000, 600);

/// Width of one bar; the bars of a chest-pain type sit side by side around
/// its tick.
const BAR_WIDTH: f64 = 0.35;

pub(crate) fn render(dataset: &Dataset, path: &Path) -> Result<(), PlotError> {
    let counts = aggregate::chest_pain_counts(dataset)?;
    tracing::debug!(patients = counts.total(), "counted chest-pain groups");
    draw(&counts, path)
}

#[expect(clippy::cast_precision_loss)]
fn draw(counts: &ChestPainCounts, path: &Path) -> Result<(), PlotError> {
    let root = super::canvas(path, SIZE)?;

    let y_max = (counts.max() as f64 * 1.15).max(1.0);
    let mut chart = ChartBuilder::on(&root)
        .caption("Heart Disease by Chest Pain Type", (FONT, 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..(NUM_CHEST_PAIN_TYPES as f64 - 0.5), 0.0..y_max)
        .map_err(PlotError::chart_config)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(NUM_CHEST_PAIN_TYPES)
        .x_label_formatter(&|x| super::category_label(&CHEST_PAIN_LABELS, *x))
        .y_label_formatter(&|y| format!("{y:.0}"))
        .x_desc("Chest Pain Type")
        .y_desc("Count")
        .label_style((FONT, 16))
        .draw()
        .map_err(PlotError::drawing)?;

    let count_style =
        TextStyle::from((FONT, 14).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
    for (target, color) in TARGET_COLORS.into_iter().enumerate() {
        let bars = (0..NUM_CHEST_PAIN_TYPES)
            .map(|chest_pain| {
                let (left, right) = bar_span(chest_pain, target);
                (left, right, counts.get(chest_pain, target))
            })
            .collect::<Vec<_>>();

        chart
            .draw_series(bars.iter().map(|&(left, right, count)| {
                Rectangle::new([(left, 0.0), (right, count as f64)], color.filled())
            }))
            .map_err(PlotError::drawing)?
            .label(TARGET_LABELS[target])
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 14, y + 6)], color.filled()));
        chart
            .draw_series(bars.iter().map(|&(left, right, count)| {
                EmptyElement::at(((left + right) / 2.0, count as f64))
                    + Text::new(count.to_string(), (0, -4), count_style.clone())
            }))
            .map_err(PlotError::drawing)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 16))
        .draw()
        .map_err(PlotError::drawing)?;

    root.present().map_err(PlotError::drawing)?;
    Ok(())
}

/// Horizontal extent of the bar for (`chest_pain`, `target`).
#[expect(clippy::cast_precision_loss)]
fn bar_span(chest_pain: usize, target: usize) -> (f64, f64) {
    let left = chest_pain as f64 - BAR_WIDTH + target as f64 * BAR_WIDTH;
    (left, left + BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use heartstat_dataset::aggregate::NUM_TARGETS;

    use super::*;

    #[test]
    fn test_bars_are_adjacent_and_stay_in_their_slot() {
        for chest_pain in 0..NUM_CHEST_PAIN_TYPES {
            let (l0, r0) = bar_span(chest_pain, 0);
            let (l1, r1) = bar_span(chest_pain, 1);
            #[expect(clippy::cast_precision_loss)]
            let center = chest_pain as f64;

            assert!((r0 - l1).abs() < 1e-12);
            assert!((r0 - center).abs() < 1e-12);
            assert!(l0 > center - 0.5 && r1 < center + 0.5);
        }
        assert_eq!(NUM_TARGETS, 2);
    }
}
