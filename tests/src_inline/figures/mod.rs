use super::*;

use plotters::style::Color as _;

fn render_line(style: LineStyle) -> String {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (200, 200)).into_drawing_area();
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(0f64..1f64, 0f64..1f64)
            .unwrap();
        draw_styled_line(
            &mut chart,
            vec![(0.0, 0.0), (1.0, 1.0)],
            style,
            BLACK.stroke_width(1),
            None,
        )
        .unwrap();
        root.present().unwrap();
    }
    buf
}

#[test]
fn test_solid_line_is_one_path() {
    let svg = render_line(LineStyle::Solid);
    assert_eq!(svg.matches("<polyline").count(), 1);
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn test_dashed_line_is_split() {
    let svg = render_line(LineStyle::Dashed);
    assert!(svg.matches("<polyline").count() > 5, "{svg}");
    assert_eq!(svg.matches("<circle").count(), 0);
}

#[test]
fn test_dash_dot_has_dashes_and_dots() {
    let svg = render_line(LineStyle::DashDot);
    assert!(svg.matches("<polyline").count() > 5);
    assert!(svg.matches("<circle").count() > 5);
}

#[test]
fn test_dotted_line_has_only_dots() {
    let svg = render_line(LineStyle::Dotted);
    assert_eq!(svg.matches("<polyline").count(), 0);
    assert!(svg.matches("<circle").count() > 10);
}

#[test]
fn test_to_rgb() {
    let c = to_rgb(Color::rgb(1, 2, 3));
    assert_eq!((c.0, c.1, c.2), (1, 2, 3));
}
