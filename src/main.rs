//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use dynasty_ffl::{
    cli::{Commands, DynastyFfl, SleeperCmd},
    commands::{
        auction::{handle_auction, AuctionParams},
        available::{handle_available, AvailableParams},
        inspect::{handle_inspect, InspectParams},
        practice_squad::{handle_practice_squad, PracticeSquadParams},
        roster::{handle_roster, RosterParams},
        sleeper::{handle_sleeper_draft, handle_sleeper_roster},
        team::{handle_team, TeamParams},
    },
    logging,
    sleeper::SleeperClient,
    PracticeSquadCaps, Result,
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app = DynastyFfl::parse();
    logging::init(app.verbose);

    if let Err(e) = run(app).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(app: DynastyFfl) -> Result<()> {
    let verbose = app.verbose;

    match app.command {
        Commands::PracticeSquad {
            division,
            out,
            team_cap,
            league_cap,
            markers,
        } => handle_practice_squad(PracticeSquadParams {
            input: division.source.input,
            sheet: division.source.sheet,
            out,
            all_divisions: division.all_divisions,
            caps: PracticeSquadCaps {
                per_team: team_cap,
                league: league_cap,
            },
            markers,
            verbose,
        })?,

        Commands::Roster {
            division,
            out,
            names_out,
        } => handle_roster(RosterParams {
            input: division.source.input,
            sheet: division.source.sheet,
            out,
            all_divisions: division.all_divisions,
            names_out,
            verbose,
        })?,

        Commands::Available {
            roster,
            practice,
            rankings,
            out_taken,
            out_available,
        } => handle_available(AvailableParams {
            roster,
            practice,
            rankings,
            out_taken,
            out_available,
        })?,

        Commands::Auction {
            workbook,
            sheets,
            rankings,
            out,
            roster_size,
        } => handle_auction(AuctionParams {
            workbook,
            sheets,
            rankings,
            out,
            roster_size,
            verbose,
        })?,

        Commands::Team {
            source,
            team,
            practice_squad,
        } => handle_team(TeamParams {
            input: source.input,
            sheet: source.sheet,
            team,
            practice_squad,
            verbose,
        })?,

        Commands::Inspect {
            input,
            sheets,
            markers,
        } => handle_inspect(InspectParams {
            input,
            sheets,
            markers,
        })?,

        Commands::Sleeper { cmd } => {
            let client = SleeperClient::from_env()?;
            match cmd {
                SleeperCmd::Roster { league_id, out_dir } => {
                    handle_sleeper_roster(&client, league_id, &out_dir, verbose).await?;
                }
                SleeperCmd::Draft {
                    league_id,
                    season,
                    out_dir,
                } => {
                    handle_sleeper_draft(&client, league_id, season, &out_dir, verbose).await?;
                }
            }
        }
    }

    Ok(())
}
