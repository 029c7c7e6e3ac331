use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::AnalysisConfig;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_load::Stage1Output;
use crate::pipeline::stage2_ttest::Stage2Output;
use crate::pipeline::stage3_roc::Stage3Output;
use crate::report::json::render_summary_json;
use crate::report::text::{render_auc_line, render_report_text};
use crate::report::{
    InputSummary, MethodSummary, RocSummary, SummaryData, TTestSummary, ToolMeta, format_f64_6,
};

#[derive(Debug, Clone, Copy)]
pub struct Stage4Input<'a> {
    pub input_path: &'a Path,
    pub config: &'a AnalysisConfig,
    pub stage1: &'a Stage1Output,
    pub stage2: &'a Stage2Output,
    pub stage3: &'a Stage3Output,
}

pub fn console_ttest_lines(stage2: &Stage2Output) -> Vec<String> {
    stage2.results.iter().map(|r| r.line.clone()).collect()
}

pub fn console_auc_lines(stage3: &Stage3Output) -> Vec<String> {
    stage3
        .curves
        .iter()
        .map(|c| render_auc_line(&c.method, c.curve.auc))
        .collect()
}

pub fn build_summary(input: &Stage4Input<'_>) -> SummaryData {
    let stage1 = input.stage1;
    let n_rows = stage1.table.n_rows();
    let n_label_active = stage1.n_label_active();

    let mut methods = Vec::with_capacity(input.stage2.results.len());
    for t in &input.stage2.results {
        let Some(roc) = input.stage3.get(&t.method) else {
            continue;
        };
        methods.push(MethodSummary {
            name: t.method.clone(),
            ttest: TTestSummary {
                variant: t.result.variant,
                statistic: t.result.statistic,
                p_value: t.result.p_value,
                df: t.result.df,
                n_active: t.result.n_first,
                n_inactive: t.result.n_second,
                line: t.line.clone(),
            },
            roc: RocSummary {
                auc: roc.curve.auc,
                n_points: roc.curve.points.len(),
                n_positive: roc.curve.n_positive,
                n_negative: roc.curve.n_negative,
            },
        });
    }

    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: input.input_path.display().to_string(),
            id_column: input.config.id_column.clone(),
            n_rows,
            n_label_active,
            n_label_inactive: n_rows - n_label_active,
            n_group_active: stage1.active_rows.len(),
            n_group_inactive: stage1.inactive_rows.len(),
            n_unassigned: stage1.n_unassigned(),
            label_rule: input.config.label_rule.clone(),
        },
        methods,
    }
}

/// Writes `summary.json`, `report.txt`, `roc_points.tsv` and `labels.tsv`.
pub fn write_reports(
    input: &Stage4Input<'_>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, PipelineError> {
    fs::create_dir_all(out_dir)?;
    let summary = build_summary(input);

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    let roc_path = out_dir.join("roc_points.tsv");
    write_roc_points(input.stage3, &roc_path)?;

    let labels_path = out_dir.join("labels.tsv");
    write_labels(input.stage1, &labels_path)?;

    Ok(vec![summary_path, report_path, roc_path, labels_path])
}

fn write_roc_points(stage3: &Stage3Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "method\tthreshold\tfpr\ttpr")?;
    for c in &stage3.curves {
        for p in &c.curve.points {
            let threshold = if p.threshold.is_infinite() {
                "inf".to_string()
            } else {
                format_f64_6(p.threshold)
            };
            writeln!(
                w,
                "{}\t{}\t{}\t{}",
                c.method,
                threshold,
                format_f64_6(p.fpr),
                format_f64_6(p.tpr)
            )?;
        }
    }
    w.flush()
}

fn write_labels(stage1: &Stage1Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "identifier\tlabel\tgroup")?;
    for ((id, label), group) in stage1
        .table
        .ids
        .iter()
        .zip(stage1.labels.iter())
        .zip(stage1.groups.iter())
    {
        writeln!(w, "{}\t{}\t{}", id, label.as_u8(), group.name())?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
