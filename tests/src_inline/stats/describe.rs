use super::*;

#[test]
fn test_mean_and_variance() {
    let v = [1.0, 2.0, 3.0, 4.0];
    assert!((mean(&v) - 2.5).abs() < 1e-12);
    assert!((sum_sq_dev(&v) - 5.0).abs() < 1e-12);
    assert!((sample_std(&v) - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert_eq!(sum_sq_dev(&[7.0]), 0.0);
    assert!((sample_variance(&v) - 5.0 / 3.0).abs() < 1e-12);
    assert!(sample_variance(&[1.0]).is_nan());
    assert!(mean(&[]).is_nan());
}

#[test]
fn test_linear_quantiles() {
    let sorted = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
    assert_eq!(quantile_sorted(&sorted, 0.25), 1.75);
    assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
    assert_eq!(quantile_sorted(&sorted, 0.75), 3.25);
    assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
}

#[test]
fn test_box_stats_with_outlier() {
    let stats = BoxStats::from_values(&[5.0, 1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
    assert_eq!(stats.n, 6);
    assert_eq!(stats.median, 3.5);
    assert_eq!(stats.q1, 2.25);
    assert_eq!(stats.q3, 4.75);
    assert_eq!(stats.whisker_low, 1.0);
    assert_eq!(stats.whisker_high, 5.0);
    assert_eq!(stats.outliers, vec![100.0]);
}

#[test]
fn test_box_stats_empty() {
    assert!(BoxStats::from_values(&[]).is_none());
}
