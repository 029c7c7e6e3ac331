use crate::report::{SummaryData, format_auc, format_f64_6, format_p_value, format_statistic};
use crate::stats::ttest::{TTestResult, TTestVariant};

pub fn render_ttest_line(method: &str, result: &TTestResult) -> String {
    format!(
        "{}: t-statistic = {}, p-value = {}",
        method,
        format_statistic(result.statistic),
        format_p_value(result.p_value)
    )
}

pub fn render_auc_line(method: &str, auc: f64) -> String {
    format!("{}: AUC = {}", method, format_auc(auc))
}

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Docking Score Discrimination Report\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("File: {}\n", data.input.path));
    out.push_str(&format!("Identifier column: {}\n", data.input.id_column));
    out.push_str(&format!("Rows: {}\n", data.input.n_rows));
    out.push_str(&format!(
        "Labels: active={}, inactive={}\n",
        data.input.n_label_active, data.input.n_label_inactive
    ));
    out.push_str(&format!(
        "Groups: active={}, inactive={}, unassigned={}\n\n",
        data.input.n_group_active, data.input.n_group_inactive, data.input.n_unassigned
    ));

    out.push_str("2. Score distributions (active vs inactive)\n");
    if let Some(first) = data.methods.first() {
        out.push_str(&format!("Test: {}\n", variant_name(first.ttest.variant)));
    }
    for m in &data.methods {
        out.push_str(&format!(
            "{} (df = {})\n",
            m.ttest.line,
            format_f64_6(m.ttest.df)
        ));
    }
    out.push('\n');

    out.push_str("3. Ranking quality (lower score ranks first)\n");
    for m in &data.methods {
        out.push_str(&format!(
            "{}: AUC = {} ({})\n",
            m.name,
            format_f64_6(m.roc.auc),
            auc_statement(m.roc.auc)
        ));
    }
    if let Some(best) = best_method(data) {
        out.push_str(&format!("Best ranking: {}\n", best));
    }

    out
}

fn variant_name(variant: TTestVariant) -> &'static str {
    match variant {
        TTestVariant::Student => "Student's t-test (pooled variance)",
        TTestVariant::Welch => "Welch's t-test (unequal variances)",
    }
}

fn auc_statement(auc: f64) -> &'static str {
    if auc >= 0.9 {
        "excellent"
    } else if auc >= 0.8 {
        "good"
    } else if auc >= 0.7 {
        "fair"
    } else if auc > 0.5 {
        "weak"
    } else if auc == 0.5 {
        "no discrimination"
    } else {
        "worse than random"
    }
}

/// Highest AUC; ties keep the earlier method.
fn best_method(data: &SummaryData) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for m in &data.methods {
        match best {
            Some((_, auc)) if m.roc.auc <= auc => {}
            _ => best = Some((m.name.as_str(), m.roc.auc)),
        }
    }
    best.map(|(name, _)| name)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
