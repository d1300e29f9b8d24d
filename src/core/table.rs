//! Tabular source reader: CSV exports and spreadsheet workbooks as text grids.

use calamine::{open_workbook_auto, Data, Reader};
use std::{
    fs::File,
    io::Read,
    path::Path,
};
use tracing::debug;

use crate::{error::LeagueError, Result};

/// One source line, cells addressed by position.
pub type Row = Vec<String>;

/// In-memory grid of text cells, rows in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    source: String,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(source: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            source: source.into(),
            rows,
        }
    }

    /// Where the rows came from (path, or path and sheet), for error messages.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row length
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Trimmed cell text; `""` when the row or column is out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.trim())
            .unwrap_or("")
    }

    /// Column index of `name` in the first row (exact match after trimming).
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.rows
            .first()?
            .iter()
            .position(|cell| cell.trim() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Csv,
    Workbook,
}

fn source_kind(path: &Path) -> SourceKind {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "xla" | "ods") => SourceKind::Workbook,
        _ => SourceKind::Csv,
    }
}

/// Load a table from a CSV file or one sheet of a workbook.
///
/// `sheet` is ignored for CSV input; for workbooks `None` selects the first
/// sheet.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table> {
    if !path.exists() {
        return Err(LeagueError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    match source_kind(path) {
        SourceKind::Csv => {
            let file = File::open(path).map_err(|e| LeagueError::from_read(path, e))?;
            let rows = read_csv_rows(file).map_err(|e| LeagueError::unreadable(path, e))?;
            debug!(path = %path.display(), rows = rows.len(), "loaded csv");
            Ok(Table::new(path.display().to_string(), rows))
        }
        SourceKind::Workbook => read_sheet(path, sheet),
    }
}

/// Parse CSV text into rows. No header row; ragged rows are kept as-is.
pub fn read_csv_rows<R: Read>(reader: R) -> csv::Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect::<Row>());
    }

    // Excel "CSV UTF-8" exports lead with a BOM.
    if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    Ok(rows)
}

/// List the sheets of a workbook. A CSV file is a single sheet named after
/// its file stem.
pub fn sheet_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(LeagueError::SourceNotFound {
            path: path.display().to_string(),
        });
    }

    match source_kind(path) {
        SourceKind::Csv => Ok(vec![path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()]),
        SourceKind::Workbook => {
            let workbook = open_workbook_auto(path).map_err(|e| LeagueError::unreadable(path, e))?;
            Ok(workbook.sheet_names())
        }
    }
}

fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| LeagueError::unreadable(path, e))?;
    let available = workbook.sheet_names();

    let name = match sheet {
        Some(wanted) => available
            .iter()
            .find(|s| s.as_str() == wanted)
            .cloned()
            .ok_or_else(|| LeagueError::SheetNotFound {
                sheet: wanted.to_string(),
                available: available.clone(),
            })?,
        None => available
            .first()
            .cloned()
            .ok_or_else(|| LeagueError::unreadable(path, "workbook has no sheets"))?,
    };

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| LeagueError::unreadable(path, e))?;

    // Keep absolute sheet coordinates: the range starts at its first used cell.
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Row> = vec![Vec::new(); row_offset];
    for source_row in range.rows() {
        let mut row: Row = vec![String::new(); col_offset];
        row.extend(source_row.iter().map(cell_text));
        rows.push(row);
    }

    debug!(path = %path.display(), sheet = %name, rows = rows.len(), "loaded sheet");
    Ok(Table::new(format!("{} [{}]", path.display(), name), rows))
}

/// Render a workbook cell the way it reads in the sheet.
fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
