//! Layout inspection: what the extractors will see on a sheet.

use std::{fmt::Write as _, path::PathBuf};

use crate::{
    core::{
        extract::{team_label_above, NON_ROSTER_SECTIONS},
        layout::SheetLayout,
        sections::{marker_rows, prepare_markers, MarkerScope},
        table::{read_table, sheet_names, Table},
    },
    Result,
};

#[derive(Debug, Clone)]
pub struct InspectParams {
    pub input: PathBuf,
    pub sheets: Vec<String>,
    pub markers: Vec<String>,
}

/// One marker row and the team label each group resolves to above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    pub row: usize,
    pub text: String,
    pub teams: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetReport {
    pub source: String,
    pub rows: usize,
    pub width: usize,
    pub group_bases: Vec<usize>,
    /// Label cells of the first row, one per group
    pub header_labels: Vec<String>,
    pub hits: Vec<MarkerHit>,
}

pub fn inspect_table(table: &Table, layout: &SheetLayout, markers: &[String]) -> Result<SheetReport> {
    let sheet = layout.bind(table)?;
    let prepared = prepare_markers(markers);

    let hits = marker_rows(table.rows(), &prepared, MarkerScope::AnyCell)
        .into_iter()
        .map(|row| {
            let text = table.rows()[row]
                .iter()
                .map(|c| c.trim())
                .find(|c| !c.is_empty())
                .unwrap_or_default()
                .to_string();
            let teams = sheet
                .bases()
                .iter()
                .map(|&base| team_label_above(&sheet, row, base, &prepared))
                .collect();
            MarkerHit { row, text, teams }
        })
        .collect();

    Ok(SheetReport {
        source: table.source().to_string(),
        rows: table.len(),
        width: table.width(),
        group_bases: sheet.bases().to_vec(),
        header_labels: sheet
            .bases()
            .iter()
            .map(|&b| sheet.label(0, b).to_string())
            .collect(),
        hits,
    })
}

pub fn render_report(report: &SheetReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", report.source);
    let _ = writeln!(out, "  Shape: {} rows x {} columns", report.rows, report.width);
    let _ = writeln!(out, "  Team groups at columns: {:?}", report.group_bases);
    let _ = writeln!(out, "  First-row labels: {:?}", report.header_labels);

    if report.hits.is_empty() {
        let _ = writeln!(out, "  No marker rows found");
    }
    for hit in &report.hits {
        let teams: Vec<&str> = hit
            .teams
            .iter()
            .map(|t| t.as_deref().unwrap_or("-"))
            .collect();
        let _ = writeln!(
            out,
            "  Row {}: {:?} teams above: {}",
            hit.row + 1,
            hit.text,
            teams.join(" | ")
        );
    }
    out
}

/// Handle the inspect command
pub fn handle_inspect(params: InspectParams) -> Result<()> {
    let sheets = if params.sheets.is_empty() {
        sheet_names(&params.input)?
    } else {
        params.sheets.clone()
    };
    let markers: Vec<String> = if params.markers.is_empty() {
        NON_ROSTER_SECTIONS.iter().map(|s| s.to_string()).collect()
    } else {
        params.markers.clone()
    };

    println!("Sheets: {}", sheets.join(", "));
    for sheet in &sheets {
        let table = read_table(&params.input, Some(sheet))?;
        let report = inspect_table(&table, &SheetLayout::default(), &markers)?;
        print!("{}", render_report(&report));
    }

    Ok(())
}
