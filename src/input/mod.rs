use std::path::Path;

use thiserror::Error;

pub mod delimited;
pub mod schema;
pub mod spreadsheet;

use delimited::read_delimited;
use spreadsheet::read_spreadsheet;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
    #[error("delimited text error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    /// Cell text without trimming.
    pub fn raw_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(v) => format_number(*v),
        }
    }

    /// Numeric view of the cell; text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Empty => None,
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
        }
    }
}

/// Integral floats print without a fractional part so numeric identifiers stay readable.
fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

/// Header plus data rows, exactly as read from the source.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn column_positions(&self, name: &str) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.as_str() == name)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    Delimited(u8),
}

pub fn detect_format(path: &Path) -> Result<InputFormat, InputError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let (stem, gzipped) = match name.strip_suffix(".gz") {
        Some(stem) => (stem, true),
        None => (name.as_str(), false),
    };
    let ext = stem.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" if !gzipped => Ok(InputFormat::Spreadsheet),
        "csv" => Ok(InputFormat::Delimited(b',')),
        "tsv" | "txt" => Ok(InputFormat::Delimited(b'\t')),
        _ => Err(InputError::UnsupportedFormat(path.display().to_string())),
    }
}

pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<RawTable, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    let table = match format {
        InputFormat::Spreadsheet => read_spreadsheet(path, sheet)?,
        InputFormat::Delimited(delimiter) => read_delimited(path, delimiter)?,
    };
    tracing::info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded input table"
    );
    Ok(table)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
