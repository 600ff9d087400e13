//! Per-sheet extraction: every worksheet of the source workbook becomes its
//! own single-sheet output file, carrying values, formulas, comments, styles,
//! row heights, and column widths.

use crate::error::SplitError;
use crate::output::resolve_output_path;
use crate::utils::cell_address;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use umya_spreadsheet::{Comment, Worksheet};

#[derive(Debug)]
pub struct SplitReport {
    pub sheets: Vec<SavedSheet>,
}

#[derive(Debug)]
pub struct SavedSheet {
    pub name: String,
    pub path: PathBuf,
    pub cells: u64,
}

/// Splits the workbook at `source` into one file per sheet under `output_dir`.
///
/// Sheets are processed sequentially in source order. Any failure aborts the
/// run immediately; output files already written stay in place.
pub fn split_workbook(source: &Path, output_dir: &Path) -> Result<SplitReport, SplitError> {
    let book = umya_spreadsheet::reader::xlsx::read(source).map_err(|error| {
        SplitError::OpenWorkbook {
            path: source.to_path_buf(),
            source: error,
        }
    })?;

    let sheet_names: Vec<String> = book
        .get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect();

    let mut report = SplitReport { sheets: Vec::new() };
    for name in &sheet_names {
        tracing::debug!(sheet = %name, "splitting sheet");
        let sheet = book
            .get_sheet_by_name(name)
            .ok_or_else(|| SplitError::SheetVanished { name: name.clone() })?;
        let saved = extract_sheet(sheet, name, output_dir)?;
        tracing::info!(
            sheet = %name,
            path = %saved.path.display(),
            cells = saved.cells,
            "sheet saved"
        );
        report.sheets.push(saved);
    }

    Ok(report)
}

/// Copies one worksheet into a fresh single-sheet workbook and persists it.
fn extract_sheet(src: &Worksheet, name: &str, output_dir: &Path) -> Result<SavedSheet, SplitError> {
    let mut dest_book = umya_spreadsheet::new_file();
    let cells = {
        let dest = dest_book
            .get_sheet_mut(&0)
            .ok_or(SplitError::MissingDefaultSheet)?;
        dest.set_name(name);
        copy_sheet_contents(src, dest)
    };

    let path = resolve_output_path(output_dir, name)?;
    umya_spreadsheet::writer::xlsx::write(&dest_book, &path).map_err(|error| {
        SplitError::SaveSheet {
            sheet: name.to_string(),
            path: path.clone(),
            source: error,
        }
    })?;

    Ok(SavedSheet {
        name: name.to_string(),
        path,
        cells,
    })
}

fn copy_sheet_contents(src: &Worksheet, dest: &mut Worksheet) -> u64 {
    // Index comments by cell address once so the cell loop stays O(1) per lookup.
    let mut comments: HashMap<String, &Comment> = HashMap::new();
    for comment in src.get_comments() {
        comments.insert(comment.get_coordinate().get_coordinate(), comment);
    }

    let (max_col, max_row) = src.get_highest_column_and_row();

    // Explicit column widths carry over 1:1 by column index.
    for col in 1..=max_col {
        if let Some(dimension) = src.get_column_dimension_by_number(&col) {
            let width = *dimension.get_width();
            if width > 0.0 {
                dest.get_column_dimension_by_number_mut(&col).set_width(width);
            }
        }
    }

    let mut cells = 0u64;
    for row in 1..=max_row {
        if let Some(dimension) = src.get_row_dimension(&row) {
            let height = *dimension.get_height();
            if height > 0.0 {
                dest.get_row_dimension_mut(&row).set_height(height);
            }
        }

        // Indices come from the loop counters, not a used-range scan: empty
        // rows inside the grid are visited, rows past the grid are not.
        for col in 1..=max_col {
            let Some(cell) = src.get_cell((col, row)) else {
                continue;
            };

            let value = cell.get_value().to_string();
            let style = cell.get_style().clone();

            let dest_cell = dest.get_cell_mut((col, row));
            dest_cell.set_style(style);
            if cell.is_formula() {
                dest_cell.set_formula(cell.get_formula().to_string());
                // Keep the cached result so readers show a value without recalc.
                dest_cell.set_formula_result_default(value);
            } else if !value.is_empty() {
                dest_cell.set_value(value);
            }

            let address = cell_address(col, row);
            if let Some(comment) = comments.get(&address) {
                dest.add_comments((*comment).clone());
            }
            cells += 1;
        }
    }

    cells
}
