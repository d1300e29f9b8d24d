//! Roster command implementation

use std::path::PathBuf;

use crate::{
    core::{
        extract::{extract_roster, ExtractOptions},
        table::read_table,
        writer::{write_entries, write_names},
    },
    Division, Result,
};

use super::plan_jobs;

#[derive(Debug, Clone)]
pub struct RosterParams {
    pub input: PathBuf,
    pub sheet: Option<String>,
    pub out: PathBuf,
    pub all_divisions: bool,
    pub names_out: PathBuf,
    pub verbose: bool,
}

/// Handle the roster command. Prints every extracted player name, writes one
/// entry CSV per division and a combined `Player` list.
pub fn handle_roster(params: RosterParams) -> Result<()> {
    let options = ExtractOptions::default();
    let jobs = plan_jobs(
        &params.input,
        params.sheet.as_deref(),
        &params.out,
        params.all_divisions,
        Division::roster_out,
    );

    let mut all_names = Vec::new();
    for job in jobs {
        if params.verbose {
            println!("Reading {}...", job.input.display());
        }
        let table = read_table(&job.input, job.sheet.as_deref())?;
        let entries = extract_roster(&table, &options)?;

        write_entries(&job.out, &entries)?;
        for entry in &entries {
            println!("{}", entry.name);
        }
        if params.verbose {
            println!(
                "✓ {}: {} rostered players written to {}",
                job.label,
                entries.len(),
                job.out.display()
            );
        }

        all_names.extend(entries.into_iter().map(|e| e.name));
    }

    write_names(&params.names_out, &all_names)?;
    if params.verbose {
        println!(
            "✓ Wrote {} player names to {}",
            all_names.len(),
            params.names_out.display()
        );
    }

    Ok(())
}
