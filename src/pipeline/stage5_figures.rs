use std::path::{Path, PathBuf};

use crate::config::{AnalysisConfig, MethodStyle};
use crate::figures::distribution::{DistributionPanel, draw_box_row, draw_violin_row};
use crate::figures::roc::{RocSeries, draw_roc_figure};
use crate::model::labels::Label;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_load::Stage1Output;
use crate::pipeline::stage2_ttest::Stage2Output;
use crate::pipeline::stage3_roc::Stage3Output;

pub const ROC_FILE: &str = "roc.svg";
pub const BOX_FILE: &str = "boxplots.svg";
pub const VIOLIN_FILE: &str = "violins.svg";

/// Writes the ROC overlay plus the box and violin rows into `out_dir`.
pub fn render_figures(
    out_dir: &Path,
    config: &AnalysisConfig,
    stage1: &Stage1Output,
    stage2: &Stage2Output,
    stage3: &Stage3Output,
) -> Result<Vec<PathBuf>, PipelineError> {
    std::fs::create_dir_all(out_dir)?;

    let series = roc_series(config, stage3);
    let roc_path = out_dir.join(ROC_FILE);
    draw_roc_figure(&roc_path, &series)?;

    let panels = distribution_panels(stage1, stage2);
    let box_path = out_dir.join(BOX_FILE);
    draw_box_row(&box_path, &panels)?;
    let violin_path = out_dir.join(VIOLIN_FILE);
    draw_violin_row(&violin_path, &panels)?;

    Ok(vec![roc_path, box_path, violin_path])
}

fn roc_series<'a>(config: &'a AnalysisConfig, stage3: &Stage3Output) -> Vec<RocSeries<'a>> {
    config
        .methods
        .iter()
        .filter_map(|style: &MethodStyle| {
            let roc = stage3.get(&style.name)?;
            Some(RocSeries {
                style,
                points: roc.curve.points.iter().map(|p| (p.fpr, p.tpr)).collect(),
                auc: roc.curve.auc,
            })
        })
        .collect()
}

/// One panel per method, rows split by label rather than by t-test group.
pub fn distribution_panels<'a>(
    stage1: &'a Stage1Output,
    stage2: &Stage2Output,
) -> Vec<DistributionPanel<'a>> {
    stage1
        .table
        .methods
        .iter()
        .enumerate()
        .map(|(idx, method)| DistributionPanel {
            method: method.as_str(),
            inactive: stage1.values_by_label(idx, Label::Inactive),
            active: stage1.values_by_label(idx, Label::Active),
            annotation: stage2
                .get(method)
                .map(|t| t.line.clone())
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_figures.rs"]
mod tests;
