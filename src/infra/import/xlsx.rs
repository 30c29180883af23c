use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::usecase::services::import::{SheetRow, DATE_COLUMNS};

pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    }
}

// DOB/DOJ cells may be stored as real Excel dates; the payload wants the
// calendar date string.
fn date_cell_to_string(cell: &Data) -> String {
    match cell {
        Data::DateTime(v) => v
            .as_datetime()
            .map(|dt| dt.date().to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(v) => v.split('T').next().unwrap_or(v).to_string(),
        other => cell_to_string(other),
    }
}

/// Reads the first sheet of a workbook into rows keyed by its header row.
/// Blank rows are skipped.
pub fn read_employee_rows(xlsx_path: &Path) -> Result<Vec<SheetRow>> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;
    let range = workbook
        .worksheet_range_at(0)
        .context("workbook has no sheets")?
        .context("failed to read first sheet")?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect(),
        None => return Ok(Vec::new()),
    };

    let mut parsed = Vec::new();
    for row in rows {
        let mut sheet_row = SheetRow::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            let value = if DATE_COLUMNS.contains(&header.as_str()) {
                date_cell_to_string(cell)
            } else {
                cell_to_string(cell)
            };
            sheet_row.set(header, value);
        }
        if !sheet_row.is_empty() {
            parsed.push(sheet_row);
        }
    }

    Ok(parsed)
}
