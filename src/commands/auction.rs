//! Auction values command implementation

use std::{collections::HashSet, path::PathBuf};

use crate::{
    core::{
        auction::{
            parse_rankings, summarize_budget, value_free_agents, AuctionValue, BudgetSummary,
            AUCTION_HEADER,
        },
        extract::{extract_practice_squad, extract_roster, ExtractOptions},
        table::read_table,
        writer::write_records,
    },
    Division, PracticeSquadCaps, Result,
};

/// Rows shown on stdout after the CSV is written.
const TOP_SHOWN: usize = 50;

#[derive(Debug, Clone)]
pub struct AuctionParams {
    pub workbook: PathBuf,
    pub sheets: Vec<String>,
    pub rankings: PathBuf,
    pub out: PathBuf,
    pub roster_size: usize,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AuctionRun {
    pub budget: BudgetSummary,
    pub taken: usize,
    pub values: Vec<AuctionValue>,
}

/// Scan the division sheets, price the free agents and write the CSV.
///
/// Every listed practice squad player counts as taken, whether or not the
/// caps would keep them.
pub fn run_auction(params: &AuctionParams) -> Result<AuctionRun> {
    let sheets: Vec<String> = if params.sheets.is_empty() {
        Division::ALL.iter().map(|d| d.sheet_name().to_string()).collect()
    } else {
        params.sheets.clone()
    };
    let options = ExtractOptions {
        caps: PracticeSquadCaps {
            per_team: usize::MAX,
            league: usize::MAX,
        },
        ..ExtractOptions::default()
    };

    let mut budget = BudgetSummary::default();
    let mut taken: HashSet<String> = HashSet::new();
    for sheet in &sheets {
        let table = read_table(&params.workbook, Some(sheet))?;
        budget += summarize_budget(&table, &options.layout, params.roster_size);

        taken.extend(extract_roster(&table, &options)?.into_iter().map(|e| e.normalized));
        let practice = extract_practice_squad(&table, &options)?;
        taken.extend(
            practice
                .accepted
                .into_iter()
                .chain(practice.rejected.into_iter().map(|r| r.entry))
                .map(|e| e.normalized),
        );
    }

    let rankings = parse_rankings(&read_table(&params.rankings, None)?)?;
    let values = value_free_agents(&rankings, &taken, &budget);
    write_records(&params.out, &AUCTION_HEADER, &values)?;

    Ok(AuctionRun {
        budget,
        taken: taken.len(),
        values,
    })
}

/// Handle the auction command
pub fn handle_auction(params: AuctionParams) -> Result<()> {
    let run = run_auction(&params)?;

    if params.verbose {
        println!(
            "Budget: ${} across {} teams, {} open roster slots",
            run.budget.cash, run.budget.teams, run.budget.open_slots
        );
        println!("Excluded {} rostered and practice squad players", run.taken);
    }
    println!(
        "Saved {} free agents → {}",
        run.values.len(),
        params.out.display()
    );

    if !run.values.is_empty() {
        println!("\nTop {} Free Agents:", TOP_SHOWN.min(run.values.len()));
        for v in run.values.iter().take(TOP_SHOWN) {
            println!("{:<28} {:<4} ${:>7.2}", v.player, v.position, v.value);
        }
    }

    Ok(())
}
