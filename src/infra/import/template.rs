use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

use crate::usecase::services::import::TEMPLATE_COLUMNS;

pub const TEMPLATE_FILE_NAME: &str = "create-employees-template.xlsx";
pub const TEMPLATE_SHEET_NAME: &str = "Employee Template";

/// Writes the single-sheet import template: one header row with the fixed
/// column vocabulary, no data rows.
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(TEMPLATE_SHEET_NAME)
        .context("failed to name template sheet")?;

    for (col, name) in TEMPLATE_COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .with_context(|| format!("failed to write template header: {name}"))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save template: {}", path.display()))?;
    Ok(())
}
