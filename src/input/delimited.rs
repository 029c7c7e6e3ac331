use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::{CellValue, InputError, RawTable};

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads a header record followed by data rows. Blank rows are skipped,
/// short rows are padded with empty cells and quoted fields may span lines.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<RawTable, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(open_maybe_gz(path)?);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(idx, h)| {
            let h = if idx == 0 { h.trim_start_matches('\u{feff}') } else { h };
            h.trim().to_string()
        })
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(InputError::Parse(format!(
            "{} has no header line",
            path.display()
        )));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        if record.len() > headers.len() {
            tracing::warn!(
                line = record.position().map(|p| p.line()),
                fields = record.len(),
                columns = headers.len(),
                "row has more fields than the header; extra fields ignored"
            );
        }
        let row = (0..headers.len())
            .map(|idx| match record.get(idx) {
                Some(v) if !v.trim().is_empty() => CellValue::Text(v.to_string()),
                _ => CellValue::Empty,
            })
            .collect();
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}
