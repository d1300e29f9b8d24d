use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `null` or missing becomes `T::default()`. Sleeper sends `null` for empty
/// player lists and settings objects.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Loosely typed scalar as text. Pick metadata mixes strings and numbers
/// (`"amount": "54"` in one draft, `54` in another).
fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    };
    Ok(text.filter(|s| !s.is_empty()))
}

/// `GET /league/{league_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub roster_positions: Vec<String>,
}

impl League {
    /// Starter slot names, aligned with each roster's `starters` list.
    pub fn starting_slots(&self) -> Vec<&str> {
        self.roster_positions
            .iter()
            .map(String::as_str)
            .filter(|p| !matches!(*p, "BN" | "IR" | "TAXI"))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// `GET /league/{league_id}/users`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub ties: Option<u32>,
    #[serde(default)]
    pub fpts: Option<f64>,
    #[serde(default)]
    pub fpts_against: Option<f64>,
    #[serde(default)]
    pub waiver_budget_used: Option<u32>,
}

/// `GET /league/{league_id}/rosters`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub players: Vec<String>,
    /// One entry per starting slot; `"0"` marks an empty slot.
    #[serde(default, deserialize_with = "de_null_default")]
    pub starters: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub reserve: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub taxi: Vec<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: RosterSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftSettings {
    #[serde(default)]
    pub teams: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /league/{league_id}/drafts` and `GET /draft/{draft_id}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    #[serde(default)]
    pub season: Option<String>,
    /// `auction`, `snake` or `linear`
    #[serde(rename = "type", default)]
    pub draft_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub settings: DraftSettings,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: DraftMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PickMetadata {
    #[serde(default, deserialize_with = "de_opt_text")]
    pub player_id: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub team: Option<String>,
    /// Winning bid, auction drafts only
    #[serde(default, deserialize_with = "de_opt_text")]
    pub amount: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub nomination: Option<String>,
}

/// `GET /draft/{draft_id}/picks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pick {
    #[serde(default)]
    pub round: Option<u32>,
    #[serde(default)]
    pub pick_no: Option<u32>,
    #[serde(default)]
    pub draft_slot: Option<u32>,
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub picked_by: Option<String>,
    #[serde(default)]
    pub is_keeper: Option<bool>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: PickMetadata,
}

/// One value of the `GET /players/nfl` map, keyed by player id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NflPlayer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub years_exp: Option<String>,
}

impl NflPlayer {
    /// `full_name`, else first and last name joined. Team defenses only have
    /// the latter.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|s| !s.is_empty()) {
            return full.to_string();
        }
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}
