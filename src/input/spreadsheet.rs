use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::input::{CellValue, InputError, RawTable};

/// Reads one worksheet, the first unless `sheet` names another.
pub fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<RawTable, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match sheet {
        Some(name) => workbook.worksheet_range(name)?,
        None => workbook.worksheet_range_at(0).ok_or_else(|| {
            InputError::Parse(format!("{} contains no worksheets", path.display()))
        })??,
    };

    table_from_range(&range, &path.display().to_string())
}

/// First row is the header; trailing blank rows are dropped.
pub fn table_from_range(range: &Range<Data>, source: &str) -> Result<RawTable, InputError> {
    let mut rows_iter = range.rows();
    let headers = match rows_iter.next() {
        Some(row) => row
            .iter()
            .map(|cell| convert_cell(cell).as_text())
            .collect::<Vec<_>>(),
        None => {
            return Err(InputError::Parse(format!("{source} worksheet is empty")));
        }
    };

    let mut rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| {
            let mut cells: Vec<CellValue> = row.iter().map(convert_cell).collect();
            cells.resize(headers.len(), CellValue::Empty);
            cells
        })
        .collect();
    while rows
        .last()
        .is_some_and(|row| row.iter().all(CellValue::is_empty))
    {
        rows.pop();
    }

    Ok(RawTable { headers, rows })
}

pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/spreadsheet.rs"]
mod tests;
