//! Independent two-sample t-tests (Student's pooled variance and Welch).

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use thiserror::Error;

use crate::stats::describe::{mean, sample_variance, sum_sq_dev};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TTestVariant {
    /// Pooled variance, `df = n1 + n2 - 2`.
    #[default]
    Student,
    /// Unequal variances, Welch–Satterthwaite degrees of freedom.
    Welch,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("{0} group is empty")]
    EmptyGroup(&'static str),
    #[error("not enough observations for a t-test (df = {0})")]
    InsufficientDegreesOfFreedom(f64),
    #[error("zero variance in both groups; t-statistic is undefined")]
    ZeroVariance,
    #[error("non-finite score in {0} group")]
    NonFinite(&'static str),
    #[error("t distribution unavailable: {0}")]
    Distribution(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TTestResult {
    pub statistic: f64,
    pub p_value: f64,
    pub df: f64,
    pub n_first: usize,
    pub n_second: usize,
    pub variant: TTestVariant,
}

/// Two-sided test of `mean(first) == mean(second)`.
///
/// The statistic is positive when `first` has the larger mean; swapping the
/// samples flips its sign and leaves the p-value unchanged.
pub fn ttest_ind(
    first: &[f64],
    second: &[f64],
    variant: TTestVariant,
) -> Result<TTestResult, StatsError> {
    check_sample(first, "first")?;
    check_sample(second, "second")?;

    let n1 = first.len() as f64;
    let n2 = second.len() as f64;
    let diff = mean(first) - mean(second);

    let (std_err, df) = match variant {
        TTestVariant::Student => {
            let df = n1 + n2 - 2.0;
            if df <= 0.0 {
                return Err(StatsError::InsufficientDegreesOfFreedom(df));
            }
            let pooled = (sum_sq_dev(first) + sum_sq_dev(second)) / df;
            ((pooled * (1.0 / n1 + 1.0 / n2)).sqrt(), df)
        }
        TTestVariant::Welch => {
            if first.len() < 2 || second.len() < 2 {
                return Err(StatsError::InsufficientDegreesOfFreedom(0.0));
            }
            let a = sample_variance(first) / n1;
            let b = sample_variance(second) / n2;
            let denom = a * a / (n1 - 1.0) + b * b / (n2 - 1.0);
            if denom <= 0.0 {
                return Err(StatsError::ZeroVariance);
            }
            ((a + b).sqrt(), (a + b) * (a + b) / denom)
        }
    };

    if std_err <= 0.0 || !std_err.is_finite() {
        return Err(StatsError::ZeroVariance);
    }

    let statistic = diff / std_err;
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Distribution(e.to_string()))?;
    let p_value = (2.0 * dist.cdf(-statistic.abs())).clamp(0.0, 1.0);

    Ok(TTestResult {
        statistic,
        p_value,
        df,
        n_first: first.len(),
        n_second: second.len(),
        variant,
    })
}

fn check_sample(values: &[f64], which: &'static str) -> Result<(), StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyGroup(which));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFinite(which));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/ttest.rs"]
mod tests;
