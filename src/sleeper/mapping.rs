//! Joins of Sleeper rosters, users, drafts and players into flat rows.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use super::types::{Draft, League, NflPlayer, Pick, Roster, User};

/// Starter slots Sleeper leaves empty carry this id.
const EMPTY_SLOT: &str = "0";

fn is_player_id(id: &str) -> bool {
    !id.is_empty() && id != EMPTY_SLOT
}

/// Lookup of league members by user id and roster owners by roster id.
#[derive(Debug, Clone, Default)]
pub struct OwnerDirectory<'a> {
    users: HashMap<&'a str, &'a User>,
    roster_owner: HashMap<u32, &'a str>,
}

impl<'a> OwnerDirectory<'a> {
    pub fn new(users: &'a [User], rosters: &'a [Roster]) -> Self {
        Self {
            users: users.iter().map(|u| (u.user_id.as_str(), u)).collect(),
            roster_owner: rosters
                .iter()
                .filter_map(|r| Some((r.roster_id, r.owner_id.as_deref()?)))
                .collect(),
        }
    }

    /// Display name, else username. `None` for users outside the league.
    pub fn user_label(&self, user_id: &str) -> Option<String> {
        let user = self.users.get(user_id)?;
        user.display_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(user.username.as_deref().filter(|s| !s.is_empty()))
            .map(str::to_string)
    }

    /// `user_label`, falling back to the id itself for league members.
    pub fn display_name(&self, user_id: &str) -> String {
        match self.users.get(user_id) {
            Some(_) => self.user_label(user_id).unwrap_or_else(|| user_id.to_string()),
            None => String::new(),
        }
    }

    /// The team name the member set in Sleeper, if any.
    pub fn custom_team_name(&self, user_id: &str) -> Option<String> {
        self.users
            .get(user_id)?
            .metadata
            .team_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Custom team name, else the member's display name.
    pub fn team_name(&self, user_id: &str) -> String {
        self.custom_team_name(user_id)
            .unwrap_or_else(|| self.display_name(user_id))
    }

    pub fn roster_owner(&self, roster_id: u32) -> Option<&'a str> {
        self.roster_owner.get(&roster_id).copied()
    }
}

/// One Sleeper roster joined with its owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamEntry {
    pub roster_id: u32,
    pub owner_id: Option<String>,
    pub owner_display: String,
    pub team_name: String,
    pub players: Vec<String>,
    pub starters: Vec<String>,
    pub reserve: Vec<String>,
    pub taxi: Vec<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub ties: Option<u32>,
    pub fpts: Option<f64>,
    pub fpts_against: Option<f64>,
    pub waiver_budget_used: Option<u32>,
}

impl TeamEntry {
    /// Every player id on the roster, including starters, IR and taxi.
    pub fn all_players(&self) -> BTreeSet<&str> {
        self.players
            .iter()
            .chain(&self.starters)
            .chain(&self.reserve)
            .chain(&self.taxi)
            .map(String::as_str)
            .filter(|id| is_player_id(id))
            .collect()
    }

    pub fn filled_starters(&self) -> impl Iterator<Item = (usize, &str)> {
        self.starters
            .iter()
            .enumerate()
            .map(|(i, id)| (i, id.as_str()))
            .filter(|(_, id)| is_player_id(id))
    }

    pub fn summary_row(&self, league_id: &str, season: Option<&str>) -> TeamSummaryRow {
        let starters: BTreeSet<&str> = self.filled_starters().map(|(_, id)| id).collect();
        let bench = self
            .players
            .iter()
            .map(String::as_str)
            .filter(|id| is_player_id(id) && !starters.contains(id))
            .collect::<BTreeSet<_>>()
            .len();

        TeamSummaryRow {
            league_id: league_id.to_string(),
            season: season.map(str::to_string),
            roster_id: self.roster_id,
            owner_user_id: self.owner_id.clone(),
            owner_display: self.owner_display.clone(),
            team_name: self.team_name.clone(),
            wins: self.wins,
            losses: self.losses,
            ties: self.ties,
            fpts: self.fpts,
            fpts_against: self.fpts_against,
            waiver_budget_used: self.waiver_budget_used,
            num_players: self.all_players().len(),
            num_starters: starters.len(),
            num_bench: bench,
            num_ir: self.reserve.iter().collect::<BTreeSet<_>>().len(),
            num_taxi: self.taxi.iter().collect::<BTreeSet<_>>().len(),
        }
    }
}

/// Join rosters with their owners, roster order kept.
pub fn team_entries(rosters: &[Roster], owners: &OwnerDirectory<'_>) -> Vec<TeamEntry> {
    rosters
        .iter()
        .map(|r| {
            let owner = r.owner_id.as_deref().unwrap_or_default();
            TeamEntry {
                roster_id: r.roster_id,
                owner_id: r.owner_id.clone(),
                owner_display: owners.display_name(owner),
                team_name: owners.team_name(owner),
                players: r.players.clone(),
                starters: r.starters.clone(),
                reserve: r.reserve.clone(),
                taxi: r.taxi.clone(),
                wins: r.settings.wins,
                losses: r.settings.losses,
                ties: r.settings.ties,
                fpts: r.settings.fpts,
                fpts_against: r.settings.fpts_against,
                waiver_budget_used: r.settings.waiver_budget_used,
            }
        })
        .collect()
}

pub const TEAM_SUMMARY_HEADER: [&str; 17] = [
    "league_id",
    "season",
    "roster_id",
    "owner_user_id",
    "owner_display",
    "team_name",
    "wins",
    "losses",
    "ties",
    "fpts",
    "fpts_against",
    "waiver_budget_used",
    "num_players",
    "num_starters",
    "num_bench",
    "num_ir",
    "num_taxi",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummaryRow {
    pub league_id: String,
    pub season: Option<String>,
    pub roster_id: u32,
    pub owner_user_id: Option<String>,
    pub owner_display: String,
    pub team_name: String,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub ties: Option<u32>,
    pub fpts: Option<f64>,
    pub fpts_against: Option<f64>,
    pub waiver_budget_used: Option<u32>,
    pub num_players: usize,
    pub num_starters: usize,
    pub num_bench: usize,
    pub num_ir: usize,
    pub num_taxi: usize,
}

pub const ROSTER_PLAYER_HEADER: [&str; 15] = [
    "league_id",
    "season",
    "owner_user_id",
    "owner_display",
    "team_name",
    "roster_id",
    "slot_type",
    "slot_label",
    "player_id",
    "player",
    "pos",
    "nfl_team",
    "age",
    "status",
    "years_exp",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterPlayerRow {
    pub league_id: String,
    pub season: Option<String>,
    pub owner_user_id: Option<String>,
    pub owner_display: String,
    pub team_name: String,
    pub roster_id: u32,
    pub slot_type: String,
    pub slot_label: String,
    pub player_id: String,
    pub player: String,
    pub pos: Option<String>,
    pub nfl_team: Option<String>,
    pub age: Option<String>,
    pub status: Option<String>,
    pub years_exp: Option<String>,
}

/// One row per rostered player, with the slot they occupy. Starter slots are
/// named from the league's `roster_positions`; anything past the known slots
/// is labelled `STARTER`. Rows are sorted by team, slot type, position and
/// player name.
pub fn roster_player_rows(
    league: &League,
    teams: &[TeamEntry],
    players: &HashMap<String, NflPlayer>,
) -> Vec<RosterPlayerRow> {
    let slots = league.starting_slots();
    let mut rows = Vec::new();

    for team in teams {
        let starter_slot: HashMap<&str, &str> = team
            .filled_starters()
            .map(|(i, id)| (id, slots.get(i).copied().unwrap_or("STARTER")))
            .collect();

        for id in team.all_players() {
            let slot_type = if starter_slot.contains_key(id) {
                "STARTER"
            } else if team.reserve.iter().any(|r| r == id) {
                "IR"
            } else if team.taxi.iter().any(|t| t == id) {
                "TAXI"
            } else {
                "BENCH"
            };
            let slot_label = starter_slot.get(id).copied().unwrap_or(slot_type);
            let meta = players.get(id).cloned().unwrap_or_default();

            rows.push(RosterPlayerRow {
                league_id: league.league_id.clone(),
                season: league.season.clone(),
                owner_user_id: team.owner_id.clone(),
                owner_display: team.owner_display.clone(),
                team_name: team.team_name.clone(),
                roster_id: team.roster_id,
                slot_type: slot_type.to_string(),
                slot_label: slot_label.to_string(),
                player_id: id.to_string(),
                player: meta.display_name(),
                pos: meta.position,
                nfl_team: meta.team,
                age: meta.age,
                status: meta.status,
                years_exp: meta.years_exp,
            });
        }
    }

    rows.sort_by(|a, b| {
        (&a.team_name, &a.slot_type, &a.pos, &a.player).cmp(&(
            &b.team_name,
            &b.slot_type,
            &b.pos,
            &b.player,
        ))
    });
    rows
}

pub const PICK_HEADER: [&str; 21] = [
    "season",
    "draft_id",
    "draft_name",
    "draft_type",
    "status",
    "num_teams",
    "round",
    "pick_no",
    "overall_slot",
    "nomination",
    "auction_price",
    "player_id",
    "first_name",
    "last_name",
    "position",
    "team",
    "picked_by_user_id",
    "picked_by_display",
    "picked_by_team_name",
    "roster_id",
    "is_keeper",
];

/// One draft or auction pick with draft context and the picking team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickEntry {
    pub season: Option<String>,
    pub draft_id: String,
    pub draft_name: Option<String>,
    pub draft_type: Option<String>,
    pub status: Option<String>,
    pub num_teams: Option<u32>,
    pub round: Option<u32>,
    pub pick_no: Option<u32>,
    pub overall_slot: Option<u32>,
    pub nomination: Option<String>,
    pub auction_price: Option<String>,
    pub player_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub picked_by_user_id: Option<String>,
    pub picked_by_display: Option<String>,
    pub picked_by_team_name: Option<String>,
    pub roster_id: Option<u32>,
    pub is_keeper: Option<bool>,
}

/// Flatten a draft's picks. The picker is `picked_by`, or the owner of the
/// pick's roster when Sleeper leaves it blank (commissioner-entered picks).
pub fn pick_entries(draft: &Draft, picks: &[Pick], owners: &OwnerDirectory<'_>) -> Vec<PickEntry> {
    picks
        .iter()
        .map(|p| {
            let picker = p
                .picked_by
                .clone()
                .or_else(|| p.roster_id.and_then(|id| owners.roster_owner(id)).map(str::to_string));
            let md = &p.metadata;

            PickEntry {
                season: draft.season.clone(),
                draft_id: draft.draft_id.clone(),
                draft_name: draft.metadata.name.clone(),
                draft_type: draft.draft_type.clone(),
                status: draft.status.clone(),
                num_teams: draft.settings.teams,
                round: p.round,
                pick_no: p.pick_no,
                overall_slot: p.draft_slot,
                nomination: md.nomination.clone(),
                auction_price: md.amount.clone(),
                player_id: md.player_id.clone(),
                first_name: md.first_name.clone(),
                last_name: md.last_name.clone(),
                position: md.position.clone(),
                team: md.team.clone(),
                picked_by_display: picker.as_deref().and_then(|u| owners.user_label(u)),
                picked_by_team_name: picker.as_deref().and_then(|u| owners.custom_team_name(u)),
                picked_by_user_id: picker,
                roster_id: p.roster_id,
                is_keeper: p.is_keeper,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sleeper::types::{PickMetadata, UserMetadata};

    fn user(id: &str, display: Option<&str>, username: Option<&str>, team: Option<&str>) -> User {
        User {
            user_id: id.to_string(),
            display_name: display.map(String::from),
            username: username.map(String::from),
            metadata: UserMetadata {
                team_name: team.map(String::from),
            },
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn league_fixture() -> (Vec<User>, Vec<Roster>) {
        let users = vec![
            user("u1", Some("Mickey"), Some("mick"), Some("JP BREAKS")),
            user("u2", None, Some("speedy"), None),
            user("u3", None, None, None),
        ];
        let rosters = vec![
            Roster {
                roster_id: 1,
                owner_id: Some("u1".into()),
                players: ids(&["4046", "9509", "1234", "7777"]),
                starters: ids(&["4046", "0", "9509"]),
                reserve: ids(&["1234"]),
                taxi: ids(&["8888"]),
                ..Roster::default()
            },
            Roster {
                roster_id: 2,
                owner_id: Some("u2".into()),
                ..Roster::default()
            },
            Roster {
                roster_id: 3,
                owner_id: Some("u3".into()),
                ..Roster::default()
            },
            Roster {
                roster_id: 4,
                owner_id: None,
                ..Roster::default()
            },
        ];
        (users, rosters)
    }

    #[test]
    fn test_owner_names_fall_back() {
        let (users, rosters) = league_fixture();
        let owners = OwnerDirectory::new(&users, &rosters);

        assert_eq!(owners.display_name("u1"), "Mickey");
        assert_eq!(owners.display_name("u2"), "speedy");
        assert_eq!(owners.display_name("u3"), "u3");
        assert_eq!(owners.display_name("stranger"), "");

        assert_eq!(owners.team_name("u1"), "JP BREAKS");
        assert_eq!(owners.team_name("u2"), "speedy");
        assert_eq!(owners.roster_owner(2), Some("u2"));
        assert_eq!(owners.roster_owner(4), None);
    }

    #[test]
    fn test_team_entries_and_summary_counts() {
        let (users, rosters) = league_fixture();
        let owners = OwnerDirectory::new(&users, &rosters);
        let teams = team_entries(&rosters, &owners);

        assert_eq!(teams.len(), 4);
        assert_eq!(teams[0].team_name, "JP BREAKS");
        assert_eq!(teams[3].owner_display, "");

        let summary = teams[0].summary_row("780973719656284160", Some("2025"));
        assert_eq!(summary.num_players, 5);
        assert_eq!(summary.num_starters, 2);
        assert_eq!(summary.num_bench, 2);
        assert_eq!(summary.num_ir, 1);
        assert_eq!(summary.num_taxi, 1);
        assert_eq!(summary.season.as_deref(), Some("2025"));
    }

    #[test]
    fn test_roster_player_rows_slots_and_order() {
        let (users, rosters) = league_fixture();
        let owners = OwnerDirectory::new(&users, &rosters);
        let teams = team_entries(&rosters[..1], &owners);
        let league = League {
            league_id: "42".into(),
            season: Some("2025".into()),
            roster_positions: ids(&["QB", "RB", "WR", "BN", "IR"]),
            ..League::default()
        };
        let players: HashMap<String, NflPlayer> = [
            ("4046", "Josh Allen", "QB"),
            ("9509", "Bijan Robinson", "RB"),
            ("1234", "Hurt Guy", "WR"),
            ("7777", "Bench Guy", "TE"),
        ]
        .into_iter()
        .map(|(id, name, pos)| {
            (
                id.to_string(),
                NflPlayer {
                    full_name: Some(name.into()),
                    position: Some(pos.into()),
                    ..NflPlayer::default()
                },
            )
        })
        .collect();

        let rows = roster_player_rows(&league, &teams, &players);

        let summary: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|r| (r.slot_type.as_str(), r.slot_label.as_str(), r.player.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("BENCH", "BENCH", "Bench Guy"),
                ("IR", "IR", "Hurt Guy"),
                ("STARTER", "QB", "Josh Allen"),
                ("STARTER", "WR", "Bijan Robinson"),
                ("TAXI", "TAXI", ""),
            ]
        );
        assert!(rows.iter().all(|r| r.team_name == "JP BREAKS"));
    }

    #[test]
    fn test_pick_entries_resolve_picker() {
        let (users, rosters) = league_fixture();
        let owners = OwnerDirectory::new(&users, &rosters);
        let draft = Draft {
            draft_id: "d1".into(),
            season: Some("2025".into()),
            draft_type: Some("auction".into()),
            ..Draft::default()
        };
        let picks = vec![
            Pick {
                round: Some(1),
                pick_no: Some(1),
                roster_id: Some(2),
                picked_by: Some("u1".into()),
                metadata: PickMetadata {
                    amount: Some("54".into()),
                    first_name: Some("Bijan".into()),
                    ..PickMetadata::default()
                },
                ..Pick::default()
            },
            Pick {
                round: Some(1),
                pick_no: Some(2),
                roster_id: Some(2),
                ..Pick::default()
            },
            Pick {
                pick_no: Some(3),
                roster_id: Some(4),
                ..Pick::default()
            },
        ];

        let entries = pick_entries(&draft, &picks, &owners);

        assert_eq!(entries[0].picked_by_user_id.as_deref(), Some("u1"));
        assert_eq!(entries[0].picked_by_display.as_deref(), Some("Mickey"));
        assert_eq!(entries[0].picked_by_team_name.as_deref(), Some("JP BREAKS"));
        assert_eq!(entries[0].auction_price.as_deref(), Some("54"));
        assert_eq!(entries[0].draft_type.as_deref(), Some("auction"));

        assert_eq!(entries[1].picked_by_user_id.as_deref(), Some("u2"));
        assert_eq!(entries[1].picked_by_display.as_deref(), Some("speedy"));
        assert_eq!(entries[1].picked_by_team_name, None);

        assert_eq!(entries[2].picked_by_user_id, None);
        assert_eq!(entries[2].picked_by_display, None);
    }
}
