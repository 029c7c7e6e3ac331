use crate::model::labels::LabelRule;
use crate::report::{
    InputSummary, MethodSummary, RocSummary, SummaryData, TTestSummary, ToolMeta,
};
use crate::stats::ttest::TTestVariant;

pub fn method(name: &str, statistic: f64, p_value: f64, auc: f64) -> MethodSummary {
    MethodSummary {
        name: name.to_string(),
        ttest: TTestSummary {
            variant: TTestVariant::Student,
            statistic,
            p_value,
            df: 2.0,
            n_active: 2,
            n_inactive: 2,
            line: format!("{name}: t-statistic = {statistic:.2}, p-value = x"),
        },
        roc: RocSummary {
            auc,
            n_points: 5,
            n_positive: 2,
            n_negative: 2,
        },
    }
}

pub fn summary(methods: Vec<MethodSummary>) -> SummaryData {
    SummaryData {
        tool: ToolMeta {
            name: "dockeval".to_string(),
            version: "0.1.0".to_string(),
        },
        input: InputSummary {
            path: "scores.xlsx".to_string(),
            id_column: "Name".to_string(),
            n_rows: 5,
            n_label_active: 2,
            n_label_inactive: 3,
            n_group_active: 2,
            n_group_inactive: 2,
            n_unassigned: 1,
            label_rule: LabelRule::default(),
        },
        methods,
    }
}
