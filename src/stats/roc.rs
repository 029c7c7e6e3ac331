//! Receiver operating characteristic by threshold sweep.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RocError {
    #[error("label and score lengths differ ({labels} vs {scores})")]
    LengthMismatch { labels: usize, scores: usize },
    #[error("no positive samples; true positive rate is undefined")]
    NoPositives,
    #[error("no negative samples; false positive rate is undefined")]
    NoNegatives,
    #[error("non-finite score at row {0}")]
    NonFinite(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
    /// Scores `>= threshold` are called positive. The origin carries `+inf`.
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    pub auc: f64,
    pub n_positive: usize,
    pub n_negative: usize,
}

/// Builds the ROC curve where a higher `score` means "more likely positive".
///
/// Points where the curve keeps its direction are dropped, so the result holds
/// only corners. The curve always starts at (0, 0) and ends at (1, 1).
pub fn roc_curve(labels: &[bool], scores: &[f64]) -> Result<RocCurve, RocError> {
    if labels.len() != scores.len() {
        return Err(RocError::LengthMismatch {
            labels: labels.len(),
            scores: scores.len(),
        });
    }
    if let Some(idx) = scores.iter().position(|s| !s.is_finite()) {
        return Err(RocError::NonFinite(idx));
    }
    let n_positive = labels.iter().filter(|&&l| l).count();
    let n_negative = labels.len() - n_positive;
    if n_positive == 0 {
        return Err(RocError::NoPositives);
    }
    if n_negative == 0 {
        return Err(RocError::NoNegatives);
    }

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut tps = Vec::new();
    let mut fps = Vec::new();
    let mut thresholds = Vec::new();
    let (mut tp, mut fp) = (0usize, 0usize);
    for (pos, &idx) in order.iter().enumerate() {
        if labels[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        let boundary = order
            .get(pos + 1)
            .is_none_or(|&next| scores[next] != scores[idx]);
        if boundary {
            tps.push(tp as f64);
            fps.push(fp as f64);
            thresholds.push(scores[idx]);
        }
    }

    let n = thresholds.len();
    let mut points = Vec::with_capacity(n + 1);
    points.push(RocPoint {
        fpr: 0.0,
        tpr: 0.0,
        threshold: f64::INFINITY,
    });
    for i in 0..n {
        let corner = i == 0
            || i + 1 == n
            || second_diff(&fps, i) != 0.0
            || second_diff(&tps, i) != 0.0;
        if corner {
            points.push(RocPoint {
                fpr: fps[i] / n_negative as f64,
                tpr: tps[i] / n_positive as f64,
                threshold: thresholds[i],
            });
        }
    }

    let auc = trapezoid_auc(&points);
    Ok(RocCurve {
        points,
        auc,
        n_positive,
        n_negative,
    })
}

fn second_diff(values: &[f64], i: usize) -> f64 {
    values[i - 1] - 2.0 * values[i] + values[i + 1]
}

/// Trapezoidal area under points ordered by non-decreasing FPR.
pub fn trapezoid_auc(points: &[RocPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) * 0.5)
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/roc.rs"]
mod tests;
