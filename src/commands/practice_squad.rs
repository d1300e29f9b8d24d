//! Practice squad command implementation

use std::{fmt::Write as _, path::PathBuf};

use crate::{
    core::{
        extract::{extract_practice_squad, ExtractOptions, PRACTICE_SQUAD_MARKER},
        table::read_table,
        writer::write_entries,
    },
    Division, PracticeSquadCaps, Result, Selection,
};

use super::plan_jobs;

#[derive(Debug, Clone)]
pub struct PracticeSquadParams {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub out: PathBuf,
    pub all_divisions: bool,
    pub caps: PracticeSquadCaps,
    pub markers: Vec<String>,
    pub verbose: bool,
}

/// Handle the practice squad command
pub fn handle_practice_squad(params: PracticeSquadParams) -> Result<()> {
    let options = ExtractOptions {
        practice_markers: if params.markers.is_empty() {
            vec![PRACTICE_SQUAD_MARKER.to_string()]
        } else {
            params.markers.clone()
        },
        caps: params.caps,
        ..ExtractOptions::default()
    };

    let jobs = plan_jobs(
        &params.input,
        params.sheet.as_deref(),
        &params.out,
        params.all_divisions,
        Division::practice_squad_out,
    );

    for job in jobs {
        if params.verbose {
            println!("Reading {}...", job.input.display());
        }
        let table = read_table(&job.input, job.sheet.as_deref())?;
        let selection = extract_practice_squad(&table, &options)?;

        print!("{}", render_selection(&job.label, &selection, params.verbose));
        write_entries(&job.out, &selection.accepted)?;
        println!(
            "✓ Wrote {} practice squad players to {}",
            selection.total(),
            job.out.display()
        );
    }

    Ok(())
}

/// Selected and dropped players as printed to stdout. Verbose output adds the
/// per-team counts and drop reasons.
pub fn render_selection(label: &str, selection: &Selection, verbose: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label}: {} practice squad players", selection.total());

    if verbose {
        for (team, count) in selection.team_counts() {
            let _ = writeln!(out, "  {team}: {count}");
        }
    }

    for entry in &selection.accepted {
        let _ = writeln!(out, "{}", entry.name);
    }

    for rejected in &selection.rejected {
        if verbose {
            let _ = writeln!(
                out,
                "Dropped {} ({}): {}",
                rejected.entry.name, rejected.entry.team, rejected.reason
            );
        } else {
            let _ = writeln!(out, "Dropped {} ({})", rejected.entry.name, rejected.entry.team);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::{apply_caps, Entry, EntryStatus};

    fn selection() -> Selection {
        let candidates = ["One", "Two", "Three", "Four"]
            .iter()
            .map(|n| Entry::from_cell(n, "Team A", "WR", EntryStatus::PracticeSquad).unwrap())
            .collect();
        apply_caps(candidates, &PracticeSquadCaps::default()).unwrap()
    }

    #[test]
    fn test_render_selection_lists_selected_and_dropped() {
        let text = render_selection("BeamenDivision", &selection(), false);
        assert_eq!(
            text,
            "BeamenDivision: 3 practice squad players\nOne\nTwo\nThree\nDropped Four (Team A)\n"
        );
    }

    #[test]
    fn test_render_selection_verbose_adds_counts_and_reasons() {
        let text = render_selection("Falco", &selection(), true);
        assert!(text.contains("  Team A: 3\n"));
        assert!(text.contains("Dropped Four (Team A): team already has 3 practice squad players"));
    }

    #[test]
    fn test_render_empty_selection() {
        let text = render_selection("Falco", &Selection::default(), false);
        assert_eq!(text, "Falco: 0 practice squad players\n");
    }
}
