use crate::config::AnalysisConfig;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_load::Stage1Output;
use crate::stats::roc::{RocCurve, roc_curve};

#[derive(Debug, Clone)]
pub struct MethodRoc {
    pub method: String,
    pub curve: RocCurve,
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub curves: Vec<MethodRoc>,
}

impl Stage3Output {
    pub fn get(&self, method: &str) -> Option<&MethodRoc> {
        self.curves.iter().find(|c| c.method == method)
    }
}

/// Docking scores are lower-is-better, so the ranking score is the negated raw score.
pub fn ranking_scores(raw: &[f64]) -> Vec<f64> {
    raw.iter().map(|v| -v).collect()
}

pub fn run_stage3(
    stage1: &Stage1Output,
    config: &AnalysisConfig,
) -> Result<Stage3Output, PipelineError> {
    let positives: Vec<bool> = stage1.labels.iter().map(|l| l.is_active()).collect();
    let mut curves = Vec::with_capacity(config.methods.len());
    for (method_idx, method) in stage1.table.methods.iter().enumerate() {
        let scores = ranking_scores(stage1.table.scores(method_idx));
        let curve = roc_curve(&positives, &scores).map_err(|source| PipelineError::Roc {
            method: method.clone(),
            source,
        })?;
        tracing::debug!(
            method = method.as_str(),
            auc = curve.auc,
            points = curve.points.len(),
            "roc"
        );
        curves.push(MethodRoc {
            method: method.clone(),
            curve,
        });
    }
    Ok(Stage3Output { curves })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_roc.rs"]
mod tests;
