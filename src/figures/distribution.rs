use std::path::Path;

use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::figures::{CATEGORY_COLORS, FONT, FigureError, XyChart, render_error};
use crate::model::labels::Label;
use crate::stats::describe::{BoxStats, quantile_sorted, sorted_copy};
use crate::stats::kde::GaussianKde;

const PANEL_WIDTH: u32 = 500;
const PANEL_HEIGHT: u32 = 520;
const ANNOTATION_HEIGHT: u32 = 50;
const BOX_HALF_WIDTH: f64 = 0.3;
const VIOLIN_HALF_WIDTH: f64 = 0.4;
const VIOLIN_CUT: f64 = 2.0;
const VIOLIN_GRID: usize = 200;
const X_RANGE: f64 = 2.0;
/// Ticks every half unit so both category centers get a label.
const X_TICKS: usize = 5;
const CATEGORIES: [Label; 2] = [Label::Inactive, Label::Active];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Box,
    Violin,
}

impl PanelKind {
    fn title(self) -> &'static str {
        match self {
            PanelKind::Box => "Boxplot",
            PanelKind::Violin => "Violin plot",
        }
    }
}

/// Scores of one method split by label, plus the text printed under the panel.
#[derive(Debug, Clone)]
pub struct DistributionPanel<'a> {
    pub method: &'a str,
    pub inactive: Vec<f64>,
    pub active: Vec<f64>,
    pub annotation: String,
}

impl DistributionPanel<'_> {
    /// Categories in axis order: inactive (0) left, active (1) right.
    fn categories(&self) -> [(Label, &[f64]); 2] {
        [
            (Label::Inactive, self.inactive.as_slice()),
            (Label::Active, self.active.as_slice()),
        ]
    }
}

pub fn category_center(label: Label) -> f64 {
    label.as_u8() as f64 + 0.5
}

/// Tick label at `x`: the category centered there, blank elsewhere.
fn category_name(x: f64) -> String {
    CATEGORIES
        .into_iter()
        .find(|&label| (category_center(label) - x).abs() < 1e-6)
        .map(|label| label.display_name().to_string())
        .unwrap_or_default()
}

/// Closed violin polygon for `values` centered at `center`; `None` when the
/// density is undefined.
pub fn violin_outline(values: &[f64], center: f64, half_width: f64) -> Option<Vec<(f64, f64)>> {
    let kde = GaussianKde::new(values)?;
    let support = kde.evaluate_support(VIOLIN_CUT, VIOLIN_GRID);
    let max_density = support.iter().map(|&(_, d)| d).fold(0.0, f64::max);
    if max_density <= 0.0 {
        return None;
    }
    let scale = half_width / max_density;
    let mut outline: Vec<(f64, f64)> = support
        .iter()
        .map(|&(y, d)| (center + d * scale, y))
        .collect();
    outline.extend(support.iter().rev().map(|&(y, d)| (center - d * scale, y)));
    Some(outline)
}

/// Value range a panel must show, padded by 5% (or 1.0 when flat).
pub fn panel_range(panel: &DistributionPanel<'_>, kind: PanelKind) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for (_, values) in panel.categories() {
        let Some((v_lo, v_hi)) = min_max(values) else {
            continue;
        };
        let reach = match kind {
            PanelKind::Violin => {
                GaussianKde::new(values).map_or(0.0, |kde| VIOLIN_CUT * kde.bandwidth())
            }
            PanelKind::Box => 0.0,
        };
        lo = lo.min(v_lo - reach);
        hi = hi.max(v_hi + reach);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad, hi + pad)
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

pub fn draw_box_row(path: &Path, panels: &[DistributionPanel<'_>]) -> Result<(), FigureError> {
    draw_row(path, panels, PanelKind::Box)
}

pub fn draw_violin_row(path: &Path, panels: &[DistributionPanel<'_>]) -> Result<(), FigureError> {
    draw_row(path, panels, PanelKind::Violin)
}

fn draw_row(
    path: &Path,
    panels: &[DistributionPanel<'_>],
    kind: PanelKind,
) -> Result<(), FigureError> {
    let err = render_error(kind.title());
    let n = panels.len().max(1);
    let root = SVGBackend::new(path, (PANEL_WIDTH * n as u32, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let (plots, notes) = root.split_vertically(PANEL_HEIGHT - ANNOTATION_HEIGHT);
    let plot_areas = plots.split_evenly((1, n));
    let note_areas = notes.split_evenly((1, n));

    for ((panel, plot), note) in panels.iter().zip(plot_areas.iter()).zip(note_areas.iter()) {
        let (y_lo, y_hi) = panel_range(panel, kind);
        let mut chart = ChartBuilder::on(plot)
            .caption(format!("{} for {}", kind.title(), panel.method), (FONT, 18))
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(55)
            .build_cartesian_2d(0f64..X_RANGE, y_lo..y_hi)
            .map_err(&err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(X_TICKS)
            .light_line_style(BLACK.mix(0.05))
            .x_label_formatter(&|x: &f64| category_name(*x))
            .x_desc("Activity")
            .y_desc("Docking Score")
            .draw()
            .map_err(&err)?;

        for (idx, (label, values)) in panel.categories().into_iter().enumerate() {
            let center = category_center(label);
            let fill = CATEGORY_COLORS[idx];
            match kind {
                PanelKind::Box => {
                    let Some(stats) = BoxStats::from_values(values) else {
                        continue;
                    };
                    let outline = BLACK.stroke_width(1);
                    let (x0, x1) = (center - BOX_HALF_WIDTH, center + BOX_HALF_WIDTH);
                    chart
                        .draw_series([
                            Rectangle::new([(x0, stats.q1), (x1, stats.q3)], fill.filled()),
                            Rectangle::new([(x0, stats.q1), (x1, stats.q3)], outline),
                        ])
                        .map_err(&err)?;
                    let cap = BOX_HALF_WIDTH / 2.0;
                    let lines = vec![
                        vec![(x0, stats.median), (x1, stats.median)],
                        vec![(center, stats.q3), (center, stats.whisker_high)],
                        vec![(center, stats.q1), (center, stats.whisker_low)],
                        vec![
                            (center - cap, stats.whisker_high),
                            (center + cap, stats.whisker_high),
                        ],
                        vec![
                            (center - cap, stats.whisker_low),
                            (center + cap, stats.whisker_low),
                        ],
                    ];
                    chart
                        .draw_series(lines.into_iter().map(|l| PathElement::new(l, outline)))
                        .map_err(&err)?;
                    chart
                        .draw_series(
                            stats
                                .outliers
                                .iter()
                                .map(|&v| Circle::new((center, v), 3, outline)),
                        )
                        .map_err(&err)?;
                }
                PanelKind::Violin => {
                    draw_violin(&mut chart, values, center, fill).map_err(&err)?;
                }
            }
        }

        let (nw, nh) = note.dim_in_pixel();
        let style = (FONT, 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        note.draw(&Text::new(
            panel.annotation.clone(),
            ((nw / 2) as i32, (nh / 2) as i32),
            style,
        ))
        .map_err(&err)?;
    }

    root.present().map_err(&err)?;
    Ok(())
}

fn draw_violin<DB: DrawingBackend>(
    chart: &mut XyChart<'_, DB>,
    values: &[f64],
    center: f64,
    fill: RGBColor,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let outline = BLACK.stroke_width(1);
    let Some(shape) = violin_outline(values, center, VIOLIN_HALF_WIDTH) else {
        // Single or constant values collapse to a flat line.
        let flat = values
            .iter()
            .map(|&v| {
                PathElement::new(
                    vec![
                        (center - VIOLIN_HALF_WIDTH, v),
                        (center + VIOLIN_HALF_WIDTH, v),
                    ],
                    outline,
                )
            })
            .collect::<Vec<_>>();
        chart.draw_series(flat)?;
        return Ok(());
    };

    chart.draw_series([Polygon::new(shape.clone(), fill.filled())])?;
    let mut closed = shape;
    if let Some(&first) = closed.first() {
        closed.push(first);
    }
    chart.draw_series([PathElement::new(closed, outline)])?;

    let Some(kde) = GaussianKde::new(values) else {
        return Ok(());
    };
    let support = kde.evaluate_support(VIOLIN_CUT, VIOLIN_GRID);
    let max_density = support.iter().map(|&(_, d)| d).fold(0.0, f64::max);
    let sorted = sorted_copy(values);
    // (quantile, dash length, gap) in pixels; the median gets the longer dash
    for (q, size, spacing) in [(0.25, 4, 4), (0.5, 10, 4), (0.75, 4, 4)] {
        let y = quantile_sorted(&sorted, q);
        let half = VIOLIN_HALF_WIDTH * kde.density(y) / max_density;
        chart.draw_series([DashedPathElement::new(
            vec![(center - half, y), (center + half, y)],
            size,
            spacing,
            outline,
        )])?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/figures/distribution.rs"]
mod tests;
