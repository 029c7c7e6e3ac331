use serde::Serialize;

use crate::model::labels::LabelRule;
use crate::stats::ttest::TTestVariant;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub id_column: String,
    pub n_rows: usize,
    pub n_label_active: usize,
    pub n_label_inactive: usize,
    pub n_group_active: usize,
    pub n_group_inactive: usize,
    pub n_unassigned: usize,
    pub label_rule: LabelRule,
}

#[derive(Debug, Clone, Serialize)]
pub struct TTestSummary {
    pub variant: TTestVariant,
    pub statistic: f64,
    pub p_value: f64,
    pub df: f64,
    pub n_active: usize,
    pub n_inactive: usize,
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RocSummary {
    pub auc: f64,
    pub n_points: usize,
    pub n_positive: usize,
    pub n_negative: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodSummary {
    pub name: String,
    pub ttest: TTestSummary,
    pub roc: RocSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub methods: Vec<MethodSummary>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn format_statistic(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_auc(v: f64) -> String {
    format!("{:.2}", v)
}

/// Scientific notation with five decimals and an exponent of at least two
/// digits, e.g. `4.18321e-03`.
pub fn format_p_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let raw = format!("{:.5e}", v);
    match raw.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exp.abs())
        }
        None => raw,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
