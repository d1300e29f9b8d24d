use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, time::Duration};
use tracing::{debug, info};

use super::{
    mapping::{pick_entries, roster_player_rows, team_entries, OwnerDirectory, PickEntry},
    mapping::{RosterPlayerRow, TeamEntry, TeamSummaryRow},
    types::{Draft, League, NflPlayer, Pick, Roster, User},
};
use crate::{cli::types::Season, error::LeagueError, LeagueId, Result, API_BASE_ENV_VAR};

#[cfg(test)]
mod tests;

/// Base path for the Sleeper v1 API.
pub const DEFAULT_API_BASE: &str = "https://api.sleeper.app/v1";

/// Pause after every request.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(250);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the roster export writes: one summary per team and one row per
/// rostered player.
#[derive(Debug, Clone, Default)]
pub struct RosterExport {
    pub teams: Vec<TeamSummaryRow>,
    pub players: Vec<RosterPlayerRow>,
}

/// One league draft and its picks, in pick order.
#[derive(Debug, Clone, Default)]
pub struct DraftExport {
    pub draft: Draft,
    pub picks: Vec<PickEntry>,
}

/// Sequential Sleeper API client. Requests are awaited one at a time with a
/// fixed delay after each; nothing is retried.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    delay: Duration,
}

impl SleeperClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("dynasty-ffl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LeagueError::NetworkError)?;

        Ok(Self {
            http,
            base_url: DEFAULT_API_BASE.to_string(),
            delay: DEFAULT_REQUEST_DELAY,
        })
    }

    /// Client pointed at `SLEEPER_API_BASE` when it is set.
    pub fn from_env() -> Result<Self> {
        let client = Self::new()?;
        Ok(match std::env::var(API_BASE_ENV_VAR) {
            Ok(base) if !base.trim().is_empty() => client.with_base_url(base.trim()),
            _ => client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// `Duration::ZERO` disables the pause.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let body = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| LeagueError::from_http(&url, e))?
            .bytes()
            .await
            .map_err(|e| LeagueError::from_http(&url, e))?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        serde_json::from_slice(&body).map_err(|e| LeagueError::malformed_body(&url, e))
    }

    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        self.get_json(&format!("/league/{league_id}")).await
    }

    pub async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<User>> {
        self.get_json(&format!("/league/{league_id}/users")).await
    }

    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get_json(&format!("/league/{league_id}/rosters")).await
    }

    pub async fn get_drafts(&self, league_id: &LeagueId) -> Result<Vec<Draft>> {
        self.get_json(&format!("/league/{league_id}/drafts")).await
    }

    pub async fn get_draft(&self, draft_id: &str) -> Result<Draft> {
        self.get_json(&format!("/draft/{draft_id}")).await
    }

    pub async fn get_picks(&self, draft_id: &str) -> Result<Vec<Pick>> {
        self.get_json(&format!("/draft/{draft_id}/picks")).await
    }

    /// The full NFL player map. Several megabytes; only the roster export
    /// needs it.
    pub async fn get_nfl_players(&self) -> Result<HashMap<String, NflPlayer>> {
        self.get_json("/players/nfl").await
    }

    /// Every roster in the league joined with its owner.
    pub async fn fetch_roster(&self, league_id: &LeagueId) -> Result<Vec<TeamEntry>> {
        let rosters = self.get_rosters(league_id).await?;
        let users = self.get_users(league_id).await?;
        let owners = OwnerDirectory::new(&users, &rosters);

        let teams = team_entries(&rosters, &owners);
        info!(league = %league_id, teams = teams.len(), "fetched rosters");
        Ok(teams)
    }

    /// Every league draft with its picks, restricted to one season when given.
    /// Each draft's own record supplies the season, type and status; drafts
    /// that have not started come back with no picks.
    pub async fn fetch_draft(
        &self,
        league_id: &LeagueId,
        season: Option<Season>,
    ) -> Result<Vec<DraftExport>> {
        let rosters = self.get_rosters(league_id).await?;
        let users = self.get_users(league_id).await?;
        let owners = OwnerDirectory::new(&users, &rosters);

        let drafts = self.get_drafts(league_id).await?;
        let wanted: Vec<&Draft> = drafts
            .iter()
            .filter(|d| season.map_or(true, |s| s.matches(d.season.as_deref())))
            .collect();
        info!(
            league = %league_id,
            drafts = drafts.len(),
            matching = wanted.len(),
            "fetched draft list"
        );

        let mut exports = Vec::with_capacity(wanted.len());
        for summary in wanted {
            let mut draft = self.get_draft(&summary.draft_id).await?;
            if draft.season.is_none() {
                draft.season = summary.season.clone();
            }
            let picks = self.get_picks(&summary.draft_id).await?;
            debug!(draft = %draft.draft_id, picks = picks.len(), "fetched picks");

            let picks = pick_entries(&draft, &picks, &owners);
            exports.push(DraftExport { draft, picks });
        }

        Ok(exports)
    }

    /// Team summaries plus one row per rostered player with slot and player
    /// metadata, sorted by team name.
    pub async fn fetch_roster_players(&self, league_id: &LeagueId) -> Result<RosterExport> {
        let league = self.get_league(league_id).await?;
        let teams = self.fetch_roster(league_id).await?;
        let players = self.get_nfl_players().await?;

        let mut summaries: Vec<TeamSummaryRow> = teams
            .iter()
            .map(|t| t.summary_row(league_id.as_str(), league.season.as_deref()))
            .collect();
        summaries.sort_by(|a, b| a.team_name.cmp(&b.team_name));

        Ok(RosterExport {
            teams: summaries,
            players: roster_player_rows(&league, &teams, &players),
        })
    }
}
