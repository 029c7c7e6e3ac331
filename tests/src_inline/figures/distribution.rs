use super::*;

fn panel(inactive: Vec<f64>, active: Vec<f64>) -> DistributionPanel<'static> {
    DistributionPanel {
        method: "Vina",
        inactive,
        active,
        annotation: String::new(),
    }
}

#[test]
fn test_category_centers() {
    assert_eq!(category_center(Label::Inactive), 0.5);
    assert_eq!(category_center(Label::Active), 1.5);
    assert_eq!(category_name(0.5), "Inactive");
    assert_eq!(category_name(1.5), "Active");
}

#[test]
fn test_category_name_blank_between_centers() {
    assert_eq!(category_name(0.0), "");
    assert_eq!(category_name(1.0), "");
    assert_eq!(category_name(2.0), "");
    assert_eq!(category_name(1.5000000001), "Active");
}

#[test]
fn test_violin_outline_is_mirrored() {
    let outline = violin_outline(&[1.0, 2.0, 2.5, 4.0], 1.5, 0.4).unwrap();
    assert_eq!(outline.len(), 2 * VIOLIN_GRID);
    let half = outline.len() / 2;
    for i in 0..half {
        let right = outline[i];
        let left = outline[outline.len() - 1 - i];
        assert_eq!(right.1, left.1);
        assert!((right.0 - 1.5 - (1.5 - left.0)).abs() < 1e-12);
    }
    let widest = outline
        .iter()
        .map(|&(x, _)| x - 1.5)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((widest - 0.4).abs() < 1e-12);
}

#[test]
fn test_violin_outline_undefined_for_constant_values() {
    assert!(violin_outline(&[3.0, 3.0, 3.0], 0.5, 0.4).is_none());
    assert!(violin_outline(&[3.0], 0.5, 0.4).is_none());
}

#[test]
fn test_panel_range_box_padding() {
    let p = panel(vec![5.0, 5.5], vec![1.0, 1.2]);
    let (lo, hi) = panel_range(&p, PanelKind::Box);
    assert!((lo - (1.0 - 0.225)).abs() < 1e-12);
    assert!((hi - (5.5 + 0.225)).abs() < 1e-12);
}

#[test]
fn test_panel_range_violin_covers_kde_support() {
    let p = panel(vec![5.0, 5.5], vec![1.0, 1.2]);
    let (box_lo, box_hi) = panel_range(&p, PanelKind::Box);
    let (lo, hi) = panel_range(&p, PanelKind::Violin);
    assert!(lo < box_lo);
    assert!(hi > box_hi);
}

#[test]
fn test_panel_range_degenerate() {
    assert_eq!(panel_range(&panel(vec![], vec![]), PanelKind::Box), (0.0, 1.0));
    assert_eq!(
        panel_range(&panel(vec![2.0], vec![2.0]), PanelKind::Violin),
        (1.0, 3.0)
    );
}

#[test]
fn test_rows_render_to_svg() {
    let dir = std::env::temp_dir().join(format!("dockeval_dist_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let panels = vec![
        DistributionPanel {
            method: "Vina",
            inactive: vec![-6.1, -5.8, -7.0, -6.4, -5.2],
            active: vec![-8.9, -9.4, -7.7, -8.1, -10.2],
            annotation: "Vina: t-statistic = 5.32, p-value = 7.11e-04".to_string(),
        },
        DistributionPanel {
            method: "PLANET",
            inactive: vec![-5.0, -5.5, -4.9, -6.0],
            active: vec![-6.5, -7.0, -6.8, -7.4],
            annotation: String::new(),
        },
    ];

    let box_path = dir.join("boxplots.svg");
    draw_box_row(&box_path, &panels).unwrap();
    let svg = std::fs::read_to_string(&box_path).unwrap();
    assert!(svg.contains("Boxplot for Vina"));
    assert!(svg.contains("Boxplot for PLANET"));
    assert!(svg.contains("Inactive"));

    let violin_path = dir.join("violins.svg");
    draw_violin_row(&violin_path, &panels).unwrap();
    let svg = std::fs::read_to_string(&violin_path).unwrap();
    assert!(svg.contains("Violin plot for Vina"));
    assert!(svg.contains("Active"));
}
