//! Section boundary detection.
//!
//! A section starts on the row after a marker row and runs to the next marker
//! row or the end of the sheet. Every marker occurrence starts its own
//! section, which is how one sheet carries one block per team band.

use std::ops::Range;

use crate::core::table::Row;

/// Which cells are checked for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerScope {
    AnyCell,
    Column(usize),
}

/// Rows belonging to one marked block. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
    pub marker_row: usize,
    pub start: usize,
    pub end: usize,
}

impl SectionRange {
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lowercased, non-blank markers. Blank markers would match every row.
pub fn prepare_markers<S: AsRef<str>>(markers: &[S]) -> Vec<String> {
    markers
        .iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect()
}

/// Case-insensitive substring match of any marker against `text`.
/// `markers` must already be lowercase (see `prepare_markers`).
pub fn contains_marker<S: AsRef<str>>(text: &str, markers: &[S]) -> bool {
    let lowered = text.to_lowercase();
    markers
        .iter()
        .any(|m| !m.as_ref().is_empty() && lowered.contains(m.as_ref()))
}

fn row_has_marker(row: &[String], markers: &[String], scope: MarkerScope) -> bool {
    match scope {
        MarkerScope::AnyCell => row.iter().any(|cell| contains_marker(cell, markers)),
        MarkerScope::Column(col) => row
            .get(col)
            .is_some_and(|cell| contains_marker(cell, markers)),
    }
}

/// Indices of every row carrying a marker.
pub fn marker_rows<S: AsRef<str>>(rows: &[Row], markers: &[S], scope: MarkerScope) -> Vec<usize> {
    let markers = prepare_markers(markers);
    if markers.is_empty() {
        return Vec::new();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, row)| row_has_marker(row, &markers, scope))
        .map(|(i, _)| i)
        .collect()
}

/// Split `rows` into marker-delimited sections. No marker, no sections.
pub fn find_sections<S: AsRef<str>>(
    rows: &[Row],
    markers: &[S],
    scope: MarkerScope,
) -> Vec<SectionRange> {
    let found = marker_rows(rows, markers, scope);

    found
        .iter()
        .enumerate()
        .map(|(i, &marker_row)| SectionRange {
            marker_row,
            start: marker_row + 1,
            end: found.get(i + 1).copied().unwrap_or(rows.len()),
        })
        .collect()
}
