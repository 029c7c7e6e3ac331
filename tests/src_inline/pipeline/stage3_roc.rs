use super::*;

use crate::pipeline::PipelineError;
use crate::stats::roc::RocError;

#[path = "fixtures.rs"]
mod fixtures;

#[test]
fn test_ranking_scores_negate() {
    assert_eq!(ranking_scores(&[-9.5, 0.0, 2.0]), vec![9.5, -0.0, -2.0]);
}

#[test]
fn test_scenario_perfect_separation() {
    let stage1 = fixtures::scenario_stage1();
    let out = run_stage3(&stage1, &fixtures::config_for(&["Vina"])).unwrap();
    let vina = out.get("Vina").unwrap();
    assert_eq!(vina.curve.auc, 1.0);
    assert_eq!((vina.curve.n_positive, vina.curve.n_negative), (2, 2));
    let first = vina.curve.points[0];
    assert_eq!((first.fpr, first.tpr), (0.0, 0.0));
}

#[test]
fn test_identical_scores_give_chance_auc() {
    let stage1 = fixtures::stage1(&fixtures::SCENARIO_IDS, &[("Vina", &[3.0; 4])]);
    let out = run_stage3(&stage1, &fixtures::config_for(&["Vina"])).unwrap();
    assert_eq!(out.get("Vina").unwrap().curve.auc, 0.5);
}

#[test]
fn test_unassigned_rows_count_as_negatives() {
    let stage1 = fixtures::stage1(
        &["CHEMBL1", "ZINC1", "C001"],
        &[("Vina", &[-9.0, -8.0, -5.0])],
    );
    let out = run_stage3(&stage1, &fixtures::config_for(&["Vina"])).unwrap();
    let curve = &out.get("Vina").unwrap().curve;
    assert_eq!((curve.n_positive, curve.n_negative), (1, 2));
    assert_eq!(curve.auc, 1.0);
}

#[test]
fn test_no_actives_is_an_error() {
    let stage1 = fixtures::stage1(&["C001", "C002"], &[("Vina", &[1.0, 2.0])]);
    let err = run_stage3(&stage1, &fixtures::config_for(&["Vina"])).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Roc {
            source: RocError::NoPositives,
            ..
        }
    ));
}
