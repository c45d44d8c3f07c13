use super::types::*;
use super::utils::is_blank_row;
use crate::error::AppError;
use crate::models::ProjectRecord;
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

/// Reads the first sheet of the workbook at `path` as raw cell rows.
/// Other sheets are ignored.
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<CellValue>>, AppError> {
    let start = std::time::Instant::now();
    tracing::info!("Opening workbook {}", path.display());

    let mut workbook = open_workbook_auto(path).map_err(|e| {
        tracing::error!("Failed to open workbook {}: {}", path.display(), e);
        AppError::FileProcessingError(format!("Failed to open workbook: {}", e))
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::FileProcessingError("No sheets found in workbook".to_string()))?
        .map_err(|e| AppError::FileProcessingError(format!("Failed to read worksheet: {}", e)))?;

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    tracing::info!("Read {} rows from first sheet in {:?}", rows.len(), start.elapsed());
    Ok(rows)
}

/// Finds the header among the first [`HEADER_SCAN_ROWS`] rows: the first row
/// holding a cell labelled like the year column.
pub fn locate_header(rows: &[Vec<CellValue>]) -> Option<HeaderRow> {
    let year_aliases = Field::Year.aliases();

    rows.iter()
        .take(HEADER_SCAN_ROWS)
        .position(|row| {
            row.iter()
                .any(|cell| year_aliases.contains(&cell.display().trim()))
        })
        .map(|index| HeaderRow {
            index,
            labels: rows[index].iter().map(CellValue::cleaned).collect(),
        })
}

/// Turns one data row into a record, or `None` when any required field is
/// missing. `id` is only meaningful when a record comes back.
pub fn validate_row(row: &[CellValue], columns: &ColumnIndex, id: u32) -> Option<ProjectRecord> {
    let year = columns.cell(row, Field::Year).as_year()?;
    let project = columns.cell(row, Field::Project);
    if !project.is_truthy() {
        return None;
    }

    let project = project.cleaned();
    let business_unit = columns.cell(row, Field::BusinessUnit).cleaned();
    let category = columns.cell(row, Field::Category).cleaned();
    let size = columns.cell(row, Field::Size).cleaned();

    if project.is_empty() || business_unit.is_empty() || category.is_empty() || size.is_empty() {
        return None;
    }

    Some(ProjectRecord {
        id,
        year,
        project,
        business_unit,
        category,
        size,
    })
}

/// Runs header detection and row validation over a whole sheet. Ids run from 1
/// over accepted rows only. A sheet without a detectable header yields nothing.
pub fn extract_records(rows: &[Vec<CellValue>]) -> Vec<ProjectRecord> {
    let header = locate_header(rows);
    let (data_start, columns) = match &header {
        Some(header) => {
            tracing::debug!("Header found at row {}: {:?}", header.index, header.labels);
            (header.index + 1, ColumnIndex::resolve(&header.labels))
        }
        None => {
            tracing::warn!("No header row in the first {} rows; no columns resolved", HEADER_SCAN_ROWS);
            (0, ColumnIndex::default())
        }
    };

    let mut records = Vec::new();
    let mut rejected = 0usize;

    for row in rows.iter().skip(data_start) {
        if is_blank_row(row) {
            continue;
        }
        let next_id = records.len() as u32 + 1;
        match validate_row(row, &columns, next_id) {
            Some(record) => records.push(record),
            None => rejected += 1,
        }
    }

    tracing::info!("Accepted {} project rows, skipped {}", records.len(), rejected);
    records
}

/// Reads and validates every project row of the workbook at `path`.
pub fn load_projects(path: &Path) -> Result<Vec<ProjectRecord>, AppError> {
    let rows = read_first_sheet(path)?;
    Ok(extract_records(&rows))
}
