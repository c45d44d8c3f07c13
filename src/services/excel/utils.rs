use super::types::CellValue;

impl CellValue {
    /// Display form used for header labels and string columns.
    pub fn display(&self) -> String {
        match self {
            // f64's Display already drops the fraction of whole numbers
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Bool(b) => *b,
            CellValue::Empty => false,
        }
    }

    /// Trimmed display form, or an empty string for falsy cells.
    pub fn cleaned(&self) -> String {
        if self.is_truthy() {
            self.display().trim().to_string()
        } else {
            String::new()
        }
    }

    /// A usable year: a native, non-zero, whole number. Text that merely
    /// looks numeric does not qualify.
    pub fn as_year(&self) -> Option<i64> {
        match self {
            CellValue::Number(n) if n.is_finite() && *n != 0.0 && n.fract() == 0.0 => Some(*n as i64),
            _ => None,
        }
    }
}

pub fn is_blank_row(row: &[CellValue]) -> bool {
    row.iter().all(|cell| matches!(cell, CellValue::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_like_spreadsheet_text() {
        assert_eq!(CellValue::Number(2023.0).display(), "2023");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
        assert_eq!(CellValue::Bool(true).display(), "true");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn falsy_cells_clean_to_empty() {
        assert_eq!(CellValue::Number(0.0).cleaned(), "");
        assert_eq!(CellValue::Bool(false).cleaned(), "");
        assert_eq!(CellValue::Text("  ".into()).cleaned(), "");
        assert_eq!(CellValue::Text("  CRM ".into()).cleaned(), "CRM");
        assert_eq!(CellValue::Number(42.0).cleaned(), "42");
    }

    #[test]
    fn only_native_whole_numbers_are_years() {
        assert_eq!(CellValue::Number(2024.0).as_year(), Some(2024));
        assert_eq!(CellValue::Text("2024".into()).as_year(), None);
        assert_eq!(CellValue::Number(0.0).as_year(), None);
        assert_eq!(CellValue::Number(2024.5).as_year(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_year(), None);
        assert_eq!(CellValue::Empty.as_year(), None);
    }

    #[test]
    fn blank_rows_are_detected() {
        assert!(is_blank_row(&[]));
        assert!(is_blank_row(&[CellValue::Empty, CellValue::Empty]));
        assert!(!is_blank_row(&[CellValue::Empty, CellValue::Number(1.0)]));
    }
}
