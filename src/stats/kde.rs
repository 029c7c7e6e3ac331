use std::f64::consts::PI;

use crate::stats::describe::sample_std;

/// Gaussian kernel density estimate with Scott's bandwidth rule.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    data: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    /// `None` when the sample cannot define a bandwidth (fewer than two
    /// points or zero spread).
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }
        let std = sample_std(values);
        let factor = (values.len() as f64).powf(-0.2);
        let bandwidth = std * factor;
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return None;
        }
        Some(Self {
            data: values.to_vec(),
            bandwidth,
        })
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn density(&self, x: f64) -> f64 {
        let norm = 1.0 / (self.data.len() as f64 * self.bandwidth * (2.0 * PI).sqrt());
        self.data
            .iter()
            .map(|&xi| {
                let z = (x - xi) / self.bandwidth;
                (-0.5 * z * z).exp()
            })
            .sum::<f64>()
            * norm
    }

    /// Evaluates the density on `grid` evenly spaced points spanning the data
    /// range extended by `cut` bandwidths on each side.
    pub fn evaluate_support(&self, cut: f64, grid: usize) -> Vec<(f64, f64)> {
        let grid = grid.max(2);
        let lo = self.data.iter().copied().fold(f64::INFINITY, f64::min) - cut * self.bandwidth;
        let hi =
            self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max) + cut * self.bandwidth;
        let step = (hi - lo) / (grid - 1) as f64;
        (0..grid)
            .map(|i| {
                let x = lo + step * i as f64;
                (x, self.density(x))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/kde.rs"]
mod tests;
