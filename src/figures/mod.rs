//! SVG figures: ROC overlay, box plots and violin plots.
//!
//! Rendering goes through the plotters SVG backend so no system fonts are needed.

use plotters::coord::types::RangedCoordf64;
use plotters::element::{DashedPathElement, DottedPathElement};
use plotters::prelude::*;
use thiserror::Error;

use crate::config::{Color, LineStyle};

pub mod distribution;
pub mod roc;

pub const FONT: &str = "sans-serif";

/// seaborn "Set2" pair used for the inactive/active categories.
pub const CATEGORY_COLORS: [RGBColor; 2] = [RGBColor(102, 194, 165), RGBColor(252, 141, 98)];

#[derive(Debug, Error)]
pub enum FigureError {
    #[error("failed to render {figure}: {message}")]
    Render { figure: String, message: String },
}

pub(crate) fn render_error<E: std::fmt::Display>(figure: &str) -> impl Fn(E) -> FigureError + '_ {
    move |err| FigureError::Render {
        figure: figure.to_string(),
        message: err.to_string(),
    }
}

pub fn to_rgb(color: Color) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

/// Dot markers of a dash-dot stroke sit in the middle of each gap.
const DASH_DOT_SHIFT: u32 = 14;
const DASH_DOT_PERIOD: u32 = 18;
const DOT_SPACING: u32 = 6;
const LEGEND_LEN: i32 = 20;

pub(crate) type XyChart<'a, DB> =
    ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Draws `points` as one series in the given stroke. With a `label`, the
/// series gets a legend entry drawn in the same stroke.
pub(crate) fn draw_styled_line<DB: DrawingBackend>(
    chart: &mut XyChart<'_, DB>,
    points: Vec<(f64, f64)>,
    line_style: LineStyle,
    shape: ShapeStyle,
    label: Option<String>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let dot = move |c: (i32, i32)| Circle::new(c, 1, shape.filled());
    let anno = match (line_style.dash(), line_style) {
        (Some((size, spacing)), _) => chart
            .draw_series(DashedLineSeries::new(points.clone(), size, spacing, shape))?
            .legend(move |(x, y)| {
                DashedPathElement::new(vec![(x, y), (x + LEGEND_LEN, y)], size, spacing, shape)
            }),
        (None, LineStyle::Dotted) => chart
            .draw_series(DottedLineSeries::new(points.clone(), 0, DOT_SPACING, dot))?
            .legend(move |(x, y)| {
                DottedPathElement::new(vec![(x, y), (x + LEGEND_LEN, y)], 0, DOT_SPACING, dot)
            }),
        (None, _) => chart
            .draw_series(LineSeries::new(points.clone(), shape))?
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_LEN, y)], shape)),
    };
    if let Some(label) = label {
        anno.label(label);
    }

    if line_style.dash().is_some() && line_style.has_dots() {
        chart.draw_series(DottedLineSeries::new(
            points,
            DASH_DOT_SHIFT,
            DASH_DOT_PERIOD,
            dot,
        ))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/figures/mod.rs"]
mod tests;
