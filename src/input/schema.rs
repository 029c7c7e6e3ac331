use thiserror::Error;

use crate::input::RawTable;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("missing column '{column}' (available: {})", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("invalid score in column '{column}' at row {row}: '{value}'")]
    InvalidScore {
        column: String,
        row: usize,
        value: String,
    },
    #[error("table has no data rows")]
    NoRows,
}

/// Identifier column plus one validated numeric column per scoring method.
#[derive(Debug, Clone)]
pub struct DockingTable {
    pub ids: Vec<String>,
    pub methods: Vec<String>,
    scores: Vec<Vec<f64>>,
}

impl DockingTable {
    /// Validates the schema before anything downstream runs. Error rows are
    /// reported in sheet numbering (header is row 1).
    pub fn from_raw(
        raw: &RawTable,
        id_column: &str,
        methods: &[&str],
    ) -> Result<Self, SchemaError> {
        let id_col = resolve_column(raw, id_column)?;
        let mut score_cols = Vec::with_capacity(methods.len());
        for method in methods {
            score_cols.push(resolve_column(raw, method)?);
        }
        if raw.rows.is_empty() {
            return Err(SchemaError::NoRows);
        }

        let n_rows = raw.rows.len();
        let mut ids = Vec::with_capacity(n_rows);
        let mut blank_ids = 0usize;
        let mut padded_ids = 0usize;
        for row in 0..n_rows {
            let id = raw.cell(row, id_col).raw_text();
            if id.trim().is_empty() {
                blank_ids += 1;
            } else if id.trim() != id {
                padded_ids += 1;
            }
            ids.push(id);
        }
        if padded_ids > 0 {
            tracing::warn!(
                count = padded_ids,
                column = id_column,
                "identifiers with surrounding whitespace are matched as stored"
            );
        }
        if blank_ids > 0 {
            tracing::warn!(
                count = blank_ids,
                column = id_column,
                "rows with blank identifiers are labeled inactive and left out of both groups"
            );
        }

        let mut scores = Vec::with_capacity(methods.len());
        for (method, &col) in methods.iter().zip(score_cols.iter()) {
            let mut values = Vec::with_capacity(n_rows);
            for row in 0..n_rows {
                let cell = raw.cell(row, col);
                match cell.as_f64() {
                    Some(v) if v.is_finite() => values.push(v),
                    _ => {
                        return Err(SchemaError::InvalidScore {
                            column: method.to_string(),
                            row: row + 2,
                            value: cell.as_text(),
                        });
                    }
                }
            }
            scores.push(values);
        }

        Ok(Self {
            ids,
            methods: methods.iter().map(|m| m.to_string()).collect(),
            scores,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.ids.len()
    }

    pub fn scores(&self, method_idx: usize) -> &[f64] {
        &self.scores[method_idx]
    }
}

fn resolve_column(raw: &RawTable, name: &str) -> Result<usize, SchemaError> {
    let positions = raw.column_positions(name);
    match positions.as_slice() {
        [] => Err(SchemaError::MissingColumn {
            column: name.to_string(),
            available: raw.headers.clone(),
        }),
        [only] => Ok(*only),
        [first, ..] => {
            tracing::warn!(
                column = name,
                occurrences = positions.len(),
                "duplicate column header; using the first occurrence"
            );
            Ok(*first)
        }
    }
}
