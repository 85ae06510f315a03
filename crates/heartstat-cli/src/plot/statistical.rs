//! Annotated correlation heatmap of the numeric columns
//!
//! The grid is laid out in pixels rather than through a chart coordinate
//! system: one square-ish cell per (row, column) pair, row labels on the left,
//! column labels underneath and a vertical color bar on the right.

use std::path::Path;

use heartstat_dataset::Dataset;
use heartstat_stats::correlation::CorrelationMatrix;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{FONT, PlotError};

pub(crate) const FILE_NAME: &str = "statistical_plot.png";
pub(super) const SIZE: (u32, u32) = (1200, 800);

/// Space for the row labels left of the grid.
const ROW_LABEL_WIDTH: i32 = 110;
/// Space for the column labels under the grid.
const COLUMN_LABEL_HEIGHT: i32 = 40;
const MARGIN: i32 = 20;
/// Width reserved on the right for the color bar, its ticks and its title.
const COLOR_BAR_AREA: u32 = 140;
const COLOR_BAR_WIDTH: i32 = 30;
const COLOR_BAR_STEPS: i32 = 100;
const COLOR_BAR_TICKS: [f64; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
const COLOR_BAR_TITLE: &str = "Correlation Coefficient";
/// Distance from the bar to the title, past the tick labels.
const COLOR_BAR_TITLE_OFFSET: i32 = 70;

const LIGHT: RGBColor = RGBColor(236, 231, 242);
const MEDIUM: RGBColor = RGBColor(116, 169, 207);
const DARK: RGBColor = RGBColor(4, 90, 141);
const UNDEFINED: RGBColor = RGBColor(200, 200, 200);

pub(crate) fn render(dataset: &Dataset, path: &Path) -> Result<(), PlotError> {
    let matrix = dataset.correlation_matrix();
    tracing::debug!(columns = matrix.dim(), "computed correlation matrix");
    draw(&matrix, path)
}

fn draw(matrix: &CorrelationMatrix, path: &Path) -> Result<(), PlotError> {
    let root = super::canvas(path, SIZE)?;
    let body = root
        .titled("Correlation Matrix of Heart Disease Attributes", (FONT, 28))
        .map_err(PlotError::drawing_area)?;
    let (width, _) = body.dim_in_pixel();
    let (grid_area, bar_area) = body.split_horizontally(width.saturating_sub(COLOR_BAR_AREA));

    let layout = GridLayout::new(grid_area.dim_in_pixel(), matrix.dim());
    draw_grid(&grid_area, &layout, matrix)?;
    draw_color_bar(&bar_area, &layout)?;

    root.present().map_err(PlotError::drawing)?;
    Ok(())
}

/// Pixel geometry of the heatmap cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridLayout {
    left: i32,
    top: i32,
    cell_width: i32,
    cell_height: i32,
    dim: i32,
}

impl GridLayout {
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn new((width, height): (u32, u32), dim: usize) -> Self {
        let dim = dim as i32;
        let usable_width = width as i32 - ROW_LABEL_WIDTH - MARGIN;
        let usable_height = height as i32 - COLUMN_LABEL_HEIGHT - MARGIN;
        let (cell_width, cell_height) = if dim == 0 {
            (0, 0)
        } else {
            ((usable_width / dim).max(1), (usable_height / dim).max(1))
        };
        Self {
            left: ROW_LABEL_WIDTH,
            top: MARGIN / 2,
            cell_width,
            cell_height,
            dim,
        }
    }

    fn bottom(&self) -> i32 {
        self.top + self.cell_height * self.dim
    }

    /// Top-left and bottom-right corners of cell (`row`, `col`).
    fn cell(&self, row: i32, col: i32) -> [(i32, i32); 2] {
        let x = self.left + col * self.cell_width;
        let y = self.top + row * self.cell_height;
        [(x, y), (x + self.cell_width, y + self.cell_height)]
    }

    fn cell_center(&self, row: i32, col: i32) -> (i32, i32) {
        let [(x0, y0), (x1, y1)] = self.cell(row, col);
        ((x0 + x1) / 2, (y0 + y1) / 2)
    }
}

fn draw_grid(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    layout: &GridLayout,
    matrix: &CorrelationMatrix,
) -> Result<(), PlotError> {
    let centered = Pos::new(HPos::Center, VPos::Center);

    for (row, (name, values)) in (0..).zip(matrix.rows()) {
        for (col, &r) in (0..).zip(values) {
            area.draw(&Rectangle::new(layout.cell(row, col), cell_color(r).filled()))
                .map_err(PlotError::drawing)?;
            area.draw_text(
                &cell_label(r),
                &text_style(label_color(r), centered),
                layout.cell_center(row, col),
            )
            .map_err(PlotError::drawing)?;
        }

        let (_, y) = layout.cell_center(row, 0);
        area.draw_text(
            name,
            &text_style(BLACK, Pos::new(HPos::Right, VPos::Center)),
            (layout.left - 8, y),
        )
        .map_err(PlotError::drawing)?;
    }

    for (col, name) in (0..).zip(matrix.names()) {
        let (x, _) = layout.cell_center(0, col);
        area.draw_text(
            name,
            &text_style(BLACK, Pos::new(HPos::Center, VPos::Top)),
            (x, layout.bottom() + 8),
        )
        .map_err(PlotError::drawing)?;
    }
    Ok(())
}

fn text_style(color: RGBColor, pos: Pos) -> TextStyle<'static> {
    let mut style = TextStyle::from((FONT, 13).into_font()).pos(pos);
    style.color = color.to_backend_color();
    style
}

fn draw_color_bar(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    layout: &GridLayout,
) -> Result<(), PlotError> {
    let top = layout.top;
    let height = (layout.bottom() - top).max(COLOR_BAR_STEPS);
    let left = MARGIN;
    let right = left + COLOR_BAR_WIDTH;
    let value_at = |y: i32| 1.0 - 2.0 * f64::from(y - top) / f64::from(height);

    for step in 0..COLOR_BAR_STEPS {
        let y0 = top + height * step / COLOR_BAR_STEPS;
        let y1 = top + height * (step + 1) / COLOR_BAR_STEPS;
        area.draw(&Rectangle::new(
            [(left, y0), (right, y1)],
            cell_color(value_at((y0 + y1) / 2)).filled(),
        ))
        .map_err(PlotError::drawing)?;
    }
    area.draw(&Rectangle::new([(left, top), (right, top + height)], BLACK.stroke_width(1)))
        .map_err(PlotError::drawing)?;

    let tick_style = TextStyle::from((FONT, 13).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
    for tick in COLOR_BAR_TICKS {
        #[expect(clippy::cast_possible_truncation)]
        let y = top + ((1.0 - tick) / 2.0 * f64::from(height)).round() as i32;
        area.draw(&PathElement::new(vec![(right, y), (right + 5, y)], BLACK.stroke_width(1)))
            .map_err(PlotError::drawing)?;
        area.draw_text(&format!("{tick:.1}"), &tick_style, (right + 8, y))
            .map_err(PlotError::drawing)?;
    }

    let title_style = TextStyle::from((FONT, 15).into_font().transform(FontTransform::Rotate270))
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw_text(
        COLOR_BAR_TITLE,
        &title_style,
        (right + COLOR_BAR_TITLE_OFFSET, top + height / 2),
    )
    .map_err(PlotError::drawing)?;
    Ok(())
}

/// Light-to-dark blue over `[-1, 1]`; undefined coefficients are grey.
fn cell_color(r: f64) -> RGBColor {
    if r.is_nan() {
        return UNDEFINED;
    }
    let t = f64::midpoint(r, 1.0).clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(LIGHT, MEDIUM, t * 2.0)
    } else {
        lerp(MEDIUM, DARK, t * 2.0 - 1.0)
    }
}

/// Text color that stays readable on [`cell_color`].
fn label_color(r: f64) -> RGBColor {
    if !r.is_nan() && r > 0.2 { WHITE } else { BLACK }
}

fn cell_label(r: f64) -> String {
    if r.is_nan() {
        "NaN".to_owned()
    } else {
        format!("{r:.2}")
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(from: RGBColor, to: RGBColor, t: f64) -> RGBColor {
    let channel = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    RGBColor(
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scale() {
        assert_eq!(cell_color(-1.0), LIGHT);
        assert_eq!(cell_color(0.0), MEDIUM);
        assert_eq!(cell_color(1.0), DARK);
        assert_eq!(cell_color(f64::NAN), UNDEFINED);

        // Darker (smaller blue channel) as the coefficient grows.
        let blues = [-1.0, -0.5, 0.0, 0.5, 1.0].map(|r| cell_color(r).2);
        assert!(blues.windows(2).all(|w| w[0] >= w[1]), "{blues:?}");
    }

    #[test]
    fn test_cell_label() {
        assert_eq!(cell_label(1.0), "1.00");
        assert_eq!(cell_label(-0.4321), "-0.43");
        assert_eq!(cell_label(f64::NAN), "NaN");
    }

    #[test]
    fn test_layout_tiles_the_grid() {
        let layout = GridLayout::new((1060, 700), 14);

        assert_eq!(layout.cell(0, 0)[0], (ROW_LABEL_WIDTH, MARGIN / 2));
        assert_eq!(layout.cell(0, 0)[1].0, layout.cell(0, 1)[0].0);
        assert_eq!(layout.cell(0, 0)[1].1, layout.cell(1, 0)[0].1);
        let [_, (right, bottom)] = layout.cell(13, 13);
        assert!(right <= 1060 - MARGIN);
        assert!(bottom + COLUMN_LABEL_HEIGHT <= 700);
        assert_eq!(bottom, layout.bottom());
    }

    #[test]
    fn test_layout_of_empty_matrix() {
        let layout = GridLayout::new((1060, 700), 0);
        assert_eq!(layout.bottom(), layout.top);
    }
}
