use std::path::PathBuf;

use thiserror::Error;

use crate::config::{AnalysisConfig, ConfigError};
use crate::figures::FigureError;
use crate::input::InputError;
use crate::input::schema::SchemaError;
use crate::stats::roc::RocError;
use crate::stats::ttest::StatsError;

pub mod stage1_load;
pub mod stage2_ttest;
pub mod stage3_roc;
pub mod stage4_report;
pub mod stage5_figures;

use stage1_load::{Stage1Output, run_stage1};
use stage2_ttest::{Stage2Output, run_stage2};
use stage3_roc::{Stage3Output, run_stage3};
use stage4_report::{Stage4Input, console_auc_lines, console_ttest_lines, write_reports};
use stage5_figures::render_figures;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("t-test failed for {method}: {source}")]
    Stats {
        method: String,
        #[source]
        source: StatsError,
    },
    #[error("ROC failed for {method}: {source}")]
    Roc {
        method: String,
        #[source]
        source: RocError,
    },
    #[error(transparent)]
    Figure(#[from] FigureError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub out_dir: Option<PathBuf>,
    pub figures: bool,
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub stage1: Stage1Output,
    pub stage2: Stage2Output,
    pub stage3: Stage3Output,
    pub written: Vec<PathBuf>,
}

/// Runs every stage in order; the first error aborts the remaining stages.
pub fn run_pipeline(
    options: &PipelineOptions,
    config: &AnalysisConfig,
) -> Result<PipelineOutcome, PipelineError> {
    config.validate()?;

    let stage1 = run_stage1(&options.input, config)?;
    let stage2 = run_stage2(&stage1, config)?;
    for line in console_ttest_lines(&stage2) {
        println!("{line}");
    }

    let stage3 = run_stage3(&stage1, config)?;
    for line in console_auc_lines(&stage3) {
        println!("{line}");
    }

    let mut written = Vec::new();
    if let Some(out_dir) = options.out_dir.as_deref() {
        let input = Stage4Input {
            input_path: &options.input,
            config,
            stage1: &stage1,
            stage2: &stage2,
            stage3: &stage3,
        };
        written.extend(write_reports(&input, out_dir)?);
        if options.figures {
            written.extend(render_figures(out_dir, config, &stage1, &stage2, &stage3)?);
        }
    } else if options.figures {
        tracing::info!("no output directory given; figures skipped");
    }

    for path in &written {
        tracing::info!(path = %path.display(), "wrote output");
    }

    Ok(PipelineOutcome {
        stage1,
        stage2,
        stage3,
        written,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
