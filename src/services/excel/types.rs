use calamine::Data;

/// Rows scanned from the top of the sheet when looking for the header.
pub const HEADER_SCAN_ROWS: usize = 5;

/// A raw cell value with only the distinctions the extractor cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Float(f) => CellValue::Number(*f),
            // Serial date value, the same number the cell holds on disk
            Data::DateTime(d) => CellValue::Number(d.as_f64()),
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(_) | Data::Empty => CellValue::Empty,
        }
    }
}

/// Logical columns of a project row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year,
    Project,
    BusinessUnit,
    Category,
    Size,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Year,
        Field::Project,
        Field::BusinessUnit,
        Field::Category,
        Field::Size,
    ];

    fn slot(self) -> usize {
        self as usize
    }

    /// Header labels accepted for this field. Matched exactly after trimming.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Year => &["Year"],
            Field::Project => &["Project"],
            Field::BusinessUnit => &["Business Unit"],
            Field::Category => &["Category"],
            Field::Size => &["Size"],
        }
    }
}

/// Positions of each logical field in the sheet, resolved once per load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnIndex {
    slots: [Option<usize>; 5],
}

impl ColumnIndex {
    /// First header whose label matches one of the field's aliases wins.
    pub fn resolve(headers: &[String]) -> Self {
        let mut index = ColumnIndex::default();
        for field in Field::ALL {
            index.slots[field.slot()] = headers
                .iter()
                .position(|label| field.aliases().contains(&label.as_str()));
        }
        index
    }

    pub fn position(&self, field: Field) -> Option<usize> {
        self.slots[field.slot()]
    }

    /// Cell for `field` in `row`; unresolved columns and short rows read as empty.
    pub fn cell<'a>(&self, row: &'a [CellValue], field: Field) -> &'a CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.position(field)
            .and_then(|idx| row.get(idx))
            .unwrap_or(EMPTY)
    }
}

/// The row the column labels were taken from.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRow {
    pub index: usize,
    pub labels: Vec<String>,
}
