//! Workbook fixtures written with rust_xlsxwriter and read back through calamine.

use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub enum Cell {
    Num(f64),
    Str(&'static str),
    Blank,
}

pub fn write_workbook(path: &Path, sheets: &[Vec<Vec<Cell>>]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    for rows in sheets {
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Num(n) => {
                        worksheet.write_number(r as u32, c as u16, *n)?;
                    }
                    Cell::Str(s) => {
                        worksheet.write_string(r as u32, c as u16, *s)?;
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path)
}

/// The three-project portfolio used across tests, with a title row above
/// the header.
pub fn portfolio_rows() -> Vec<Vec<Cell>> {
    use Cell::*;
    vec![
        vec![Str("Portfolio Overview - Summary"), Blank, Blank, Blank, Blank],
        vec![Str("Year"), Str("Project"), Str("Business Unit"), Str("Category"), Str("Size")],
        vec![Num(2023.0), Str("Migration"), Str("IT"), Str("Infra"), Str("M")],
        vec![Num(2024.0), Str("Upgrade"), Str("IT"), Str("Infra"), Str("L")],
        vec![Num(2023.0), Str("Launch"), Str("Sales"), Str("CRM"), Str("S")],
    ]
}

pub fn portfolio_workbook() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("portfolio.xlsx");
    write_workbook(&path, &[portfolio_rows()]).expect("write workbook");
    (dir, path)
}
