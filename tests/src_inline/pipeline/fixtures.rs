use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::AnalysisConfig;
use crate::input::schema::DockingTable;
use crate::input::{CellValue, RawTable};
use crate::pipeline::stage1_load::{Stage1Output, label_table};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(tag: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("dockeval_{}_{}_{}", tag, std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Identifier column plus one score column per `(method, scores)` pair.
pub fn raw_table(ids: &[&str], columns: &[(&str, &[f64])]) -> RawTable {
    let mut headers = vec!["Name".to_string()];
    headers.extend(columns.iter().map(|(name, _)| name.to_string()));
    let rows = ids
        .iter()
        .enumerate()
        .map(|(row, id)| {
            let mut cells = vec![CellValue::Text(id.to_string())];
            cells.extend(columns.iter().map(|(_, scores)| CellValue::Number(scores[row])));
            cells
        })
        .collect();
    RawTable { headers, rows }
}

pub fn stage1(ids: &[&str], columns: &[(&str, &[f64])]) -> Stage1Output {
    let raw = raw_table(ids, columns);
    let methods: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    let table = DockingTable::from_raw(&raw, "Name", &methods).unwrap();
    label_table(table, &AnalysisConfig::default().label_rule)
}

pub fn config_for(methods: &[&str]) -> AnalysisConfig {
    let names: Vec<String> = methods.iter().map(|m| m.to_string()).collect();
    AnalysisConfig::default().with_method_names(&names)
}

pub const SCENARIO_IDS: [&str; 4] = ["CHEMBL1", "CHEMBL2", "C001", "C002"];
pub const SCENARIO_VINA: [f64; 4] = [1.0, 1.2, 5.0, 5.5];

pub fn scenario_stage1() -> Stage1Output {
    stage1(&SCENARIO_IDS, &[("Vina", &SCENARIO_VINA)])
}
