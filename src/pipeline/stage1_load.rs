use std::path::Path;

use crate::config::AnalysisConfig;
use crate::input::load_table;
use crate::input::schema::DockingTable;
use crate::model::labels::{Group, Label, LabelRule, assign_groups, label_rows};
use crate::pipeline::PipelineError;

#[derive(Debug)]
pub struct Stage1Output {
    pub table: DockingTable,
    pub labels: Vec<Label>,
    pub groups: Vec<Group>,
    pub active_rows: Vec<usize>,
    pub inactive_rows: Vec<usize>,
}

impl Stage1Output {
    pub fn n_unassigned(&self) -> usize {
        self.table.n_rows() - self.active_rows.len() - self.inactive_rows.len()
    }

    pub fn n_label_active(&self) -> usize {
        self.labels.iter().filter(|l| l.is_active()).count()
    }

    /// Scores of `method_idx` restricted to `rows`, in row order.
    pub fn gather(&self, method_idx: usize, rows: &[usize]) -> Vec<f64> {
        let scores = self.table.scores(method_idx);
        rows.iter().map(|&r| scores[r]).collect()
    }

    pub fn values_by_label(&self, method_idx: usize, label: Label) -> Vec<f64> {
        let scores = self.table.scores(method_idx);
        self.labels
            .iter()
            .zip(scores.iter())
            .filter(|(l, _)| **l == label)
            .map(|(_, &v)| v)
            .collect()
    }
}

pub fn run_stage1(input: &Path, config: &AnalysisConfig) -> Result<Stage1Output, PipelineError> {
    let raw = load_table(input, config.sheet.as_deref())?;
    let table = DockingTable::from_raw(&raw, &config.id_column, &config.method_names())?;
    let output = label_table(table, &config.label_rule);

    tracing::info!(
        rows = output.table.n_rows(),
        active = output.active_rows.len(),
        inactive = output.inactive_rows.len(),
        unassigned = output.n_unassigned(),
        "labeled compounds"
    );
    Ok(output)
}

pub fn label_table(table: DockingTable, rule: &LabelRule) -> Stage1Output {
    let labels = label_rows(&table.ids, rule);
    let groups = assign_groups(&table.ids, rule);

    let mut active_rows = Vec::new();
    let mut inactive_rows = Vec::new();
    for (row, group) in groups.iter().enumerate() {
        match group {
            Group::Active => active_rows.push(row),
            Group::Inactive => inactive_rows.push(row),
            Group::Unassigned => {}
        }
    }

    Stage1Output {
        table,
        labels,
        groups,
        active_rows,
        inactive_rows,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
