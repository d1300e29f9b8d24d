//! Named access to the team column groups of a division sheet.
//!
//! Division sheets place teams side by side, each in a fixed-width group of
//! columns (count, position, player, contract, separator). `SheetLayout`
//! describes one group; binding it to a table validates it once and yields a
//! `GroupedSheet` that reads cells by role instead of by raw offset.

use crate::{core::table::Table, error::LeagueError, Result};

/// Column roles within one team group, relative to the group's first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub group_width: usize,
    /// Team names, counts and section labels
    pub label_offset: usize,
    pub position_offset: usize,
    pub player_offset: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            group_width: 5,
            label_offset: 0,
            position_offset: 1,
            player_offset: 2,
        }
    }
}

impl SheetLayout {
    /// Check the layout against `table` and compute the group base columns.
    ///
    /// An empty table binds to zero groups; a non-empty table too narrow to
    /// hold a single player column is rejected.
    pub fn bind<'a>(&self, table: &'a Table) -> Result<GroupedSheet<'a>> {
        let invalid = |reason: String| LeagueError::UnreadableFormat {
            path: table.source().to_string(),
            reason,
        };

        if self.group_width == 0 {
            return Err(invalid("team group width must be at least 1".to_string()));
        }
        for (role, offset) in [
            ("label", self.label_offset),
            ("position", self.position_offset),
            ("player", self.player_offset),
        ] {
            if offset >= self.group_width {
                return Err(invalid(format!(
                    "{role} column offset {offset} is outside a {}-column team group",
                    self.group_width
                )));
            }
        }

        let width = table.width();
        let bases: Vec<usize> = (0..width)
            .step_by(self.group_width)
            .filter(|b| b + self.player_offset < width)
            .collect();

        if !table.is_empty() && bases.is_empty() {
            return Err(invalid(format!(
                "sheet is {width} columns wide; no room for a player column at offset {}",
                self.player_offset
            )));
        }

        Ok(GroupedSheet {
            table,
            layout: *self,
            bases,
        })
    }
}

/// A table viewed through a validated `SheetLayout`.
#[derive(Debug, Clone)]
pub struct GroupedSheet<'a> {
    table: &'a Table,
    layout: SheetLayout,
    bases: Vec<usize>,
}

impl<'a> GroupedSheet<'a> {
    pub fn table(&self) -> &'a Table {
        self.table
    }

    /// First column of every team group, left to right.
    pub fn bases(&self) -> &[usize] {
        &self.bases
    }

    pub fn label(&self, row: usize, base: usize) -> &'a str {
        self.table.cell(row, base + self.layout.label_offset)
    }

    pub fn position(&self, row: usize, base: usize) -> &'a str {
        self.table.cell(row, base + self.layout.position_offset)
    }

    pub fn player(&self, row: usize, base: usize) -> &'a str {
        self.table.cell(row, base + self.layout.player_offset)
    }

    /// True when any group has a non-blank player cell on `row`.
    pub fn has_players(&self, row: usize) -> bool {
        self.bases.iter().any(|&b| !self.player(row, b).is_empty())
    }
}
