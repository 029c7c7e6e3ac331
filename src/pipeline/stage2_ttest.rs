use crate::config::AnalysisConfig;
use crate::pipeline::PipelineError;
use crate::pipeline::stage1_load::Stage1Output;
use crate::report::text::render_ttest_line;
use crate::stats::ttest::{StatsError, TTestResult, ttest_ind};

#[derive(Debug, Clone)]
pub struct MethodTTest {
    pub method: String,
    pub result: TTestResult,
    pub line: String,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub results: Vec<MethodTTest>,
}

impl Stage2Output {
    pub fn get(&self, method: &str) -> Option<&MethodTTest> {
        self.results.iter().find(|r| r.method == method)
    }
}

/// Active group first, so a negative statistic means actives score lower.
pub fn run_stage2(
    stage1: &Stage1Output,
    config: &AnalysisConfig,
) -> Result<Stage2Output, PipelineError> {
    let mut results = Vec::with_capacity(config.methods.len());
    for (method_idx, method) in stage1.table.methods.iter().enumerate() {
        let active = stage1.gather(method_idx, &stage1.active_rows);
        let inactive = stage1.gather(method_idx, &stage1.inactive_rows);
        let result = ttest_ind(&active, &inactive, config.ttest).map_err(|source| {
            PipelineError::Stats {
                method: method.clone(),
                source: name_groups(source),
            }
        })?;
        tracing::debug!(
            method = method.as_str(),
            t = result.statistic,
            p = result.p_value,
            df = result.df,
            "t-test"
        );
        results.push(MethodTTest {
            method: method.clone(),
            line: render_ttest_line(method, &result),
            result,
        });
    }
    Ok(Stage2Output { results })
}

fn name_groups(err: StatsError) -> StatsError {
    let rename = |which: &'static str| match which {
        "first" => "active",
        "second" => "inactive",
        other => other,
    };
    match err {
        StatsError::EmptyGroup(which) => StatsError::EmptyGroup(rename(which)),
        StatsError::NonFinite(which) => StatsError::NonFinite(rename(which)),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_ttest.rs"]
mod tests;
