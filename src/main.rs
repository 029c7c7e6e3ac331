mod config;
mod figures;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;
mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AnalysisConfig, ConfigError};
use crate::model::labels::NamePredicate;
use crate::pipeline::{PipelineOptions, run_pipeline};
use crate::stats::ttest::TTestVariant;

#[derive(Debug, Parser)]
#[command(
    name = "dockeval",
    version,
    about = "Compare docking scoring functions on labeled active/inactive compounds"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the t-test, ROC and figure stages on one input table.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Spreadsheet (.xlsx/.xls/.ods) or delimited (.csv/.tsv, optionally .gz) table.
    #[arg(long)]
    input: PathBuf,
    /// Output directory; without it only console lines are produced.
    #[arg(long)]
    out: Option<PathBuf>,
    /// JSON analysis configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Score column to evaluate (repeatable); replaces the configured list.
    #[arg(long = "method", value_name = "NAME")]
    methods: Vec<String>,
    #[arg(long)]
    id_column: Option<String>,
    #[arg(long)]
    sheet: Option<String>,
    /// Identifier prefix marking actives (repeatable).
    #[arg(long = "active-prefix", value_name = "PREFIX")]
    active_prefixes: Vec<String>,
    /// Identifier prefix marking inactives (repeatable).
    #[arg(long = "inactive-prefix", value_name = "PREFIX")]
    inactive_prefixes: Vec<String>,
    /// Use Welch's unequal-variance t-test.
    #[arg(long)]
    welch: bool,
    #[arg(long)]
    no_plots: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    input: PathBuf,
    out_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    methods: Vec<String>,
    id_column: Option<String>,
    sheet: Option<String>,
    active_prefixes: Vec<String>,
    inactive_prefixes: Vec<String>,
    welch: bool,
    figures: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            input: args.input,
            out_dir: args.out,
            config_path: args.config,
            methods: args.methods,
            id_column: args.id_column,
            sheet: args.sheet,
            active_prefixes: args.active_prefixes,
            inactive_prefixes: args.inactive_prefixes,
            welch: args.welch,
            figures: !args.no_plots,
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let run_config = parse_args(&args)?;
    let analysis = build_analysis_config(&run_config).map_err(|e| e.to_string())?;

    let options = PipelineOptions {
        input: run_config.input,
        out_dir: run_config.out_dir,
        figures: run_config.figures,
    };
    run_pipeline(&options, &analysis).map_err(|e| e.to_string())?;
    Ok(())
}

/// Parses arguments without the program name.
fn parse_args(args: &[String]) -> Result<RunConfig, String> {
    let argv = std::iter::once("dockeval").chain(args.iter().map(String::as_str));
    let cli = Cli::try_parse_from(argv).map_err(|e| e.to_string())?;
    match cli.command {
        Command::Run(run) => Ok(run.into()),
    }
}

/// Config file (or defaults) with command-line overrides applied on top.
fn build_analysis_config(run: &RunConfig) -> Result<AnalysisConfig, ConfigError> {
    let mut config = match &run.config_path {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    config = config.with_method_names(&run.methods);
    if let Some(id_column) = &run.id_column {
        config.id_column = id_column.clone();
    }
    if run.sheet.is_some() {
        config.sheet = run.sheet.clone();
    }
    if let Some(active) = NamePredicate::from_prefixes(&run.active_prefixes) {
        config.label_rule.active = active;
    }
    if let Some(inactive) = NamePredicate::from_prefixes(&run.inactive_prefixes) {
        config.label_rule.inactive = inactive;
    }
    if run.welch {
        config.ttest = TTestVariant::Welch;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
