use std::path::Path;

use plotters::prelude::*;

use crate::config::{LineStyle, MethodStyle};
use crate::figures::{FONT, FigureError, draw_styled_line, render_error, to_rgb};
use crate::report::format_auc;

const SIZE: (u32, u32) = (1000, 700);
const TITLE: &str = "ROC Curves for Docking Software";
const Y_MAX: f64 = 1.02;

pub struct RocSeries<'a> {
    pub style: &'a MethodStyle,
    pub points: Vec<(f64, f64)>,
    pub auc: f64,
}

pub fn draw_roc_figure(path: &Path, series: &[RocSeries<'_>]) -> Result<(), FigureError> {
    let err = render_error(TITLE);
    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(&err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, (FONT, 22))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, 0f64..Y_MAX)
        .map_err(&err)?;

    chart
        .configure_mesh()
        .x_desc("False Positive Rate")
        .y_desc("True Positive Rate")
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .draw()
        .map_err(&err)?;

    for s in series {
        let line = to_rgb(s.style.color).stroke_width(2);
        draw_styled_line(
            &mut chart,
            s.points.clone(),
            s.style.line_style,
            line,
            Some(format!("{} (AUC = {})", s.style.name, format_auc(s.auc))),
        )
        .map_err(&err)?;
    }

    draw_styled_line(
        &mut chart,
        vec![(0.0, 0.0), (1.0, 1.0)],
        LineStyle::Dashed,
        BLACK.stroke_width(1),
        Some("Random Classifier (AUC = 0.50)".to_string()),
    )
    .map_err(&err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 15))
        .draw()
        .map_err(&err)?;

    root.present().map_err(&err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/figures/roc.rs"]
mod tests;
