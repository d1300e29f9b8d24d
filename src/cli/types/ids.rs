//! League ID type for the Sleeper API.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper IDs are 18-19 digit snowflakes that the API always transmits as
/// strings, so the wrapper keeps the string form and only checks that it is
/// numeric.
///
/// # Examples
///
/// ```rust
/// use dynasty_ffl::LeagueId;
///
/// let league_id: LeagueId = "780973719656284160".parse().unwrap();
/// assert_eq!(league_id.as_str(), "780973719656284160");
/// assert!("abc".parse::<LeagueId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(String);

impl LeagueId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        id.into().parse()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = LeagueError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(LeagueError::InvalidLeagueId {
                value: s.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }
}
