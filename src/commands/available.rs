//! Available players command implementation

use std::path::PathBuf;

use crate::{
    core::{
        available::{build_available, column_values, AvailablePool, NAME_COLUMNS},
        table::read_table,
        writer::{write_names, write_table},
    },
    Result,
};

#[derive(Debug, Clone)]
pub struct AvailableParams {
    pub roster: PathBuf,
    pub practice: PathBuf,
    pub rankings: PathBuf,
    pub out_taken: PathBuf,
    pub out_available: PathBuf,
}

/// Build the pool and write both CSVs.
pub fn run_available(params: &AvailableParams) -> Result<AvailablePool> {
    let roster = column_values(&read_table(&params.roster, None)?, &NAME_COLUMNS);
    let practice = column_values(&read_table(&params.practice, None)?, &NAME_COLUMNS);
    let rankings = read_table(&params.rankings, None)?;

    let pool = build_available(&roster, &practice, &rankings)?;

    write_names(&params.out_taken, &pool.taken)?;
    write_table(&params.out_available, &pool.header, &pool.available)?;
    Ok(pool)
}

/// Handle the available command
pub fn handle_available(params: AvailableParams) -> Result<()> {
    let pool = run_available(&params)?;
    let s = pool.summary;

    println!("Roster players: {}", s.roster);
    println!("Practice squad players: {}", s.practice);
    println!("Combined unique taken: {}", s.taken);
    println!("Total rankings rows: {}", s.rankings);
    println!("Available players rows: {}", s.available);
    println!("Wrote taken CSV: {}", params.out_taken.display());
    println!("Wrote available CSV: {}", params.out_available.display());

    Ok(())
}
