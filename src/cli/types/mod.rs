//! Type-safe wrappers and enums for league tooling arguments.

pub mod division;
pub mod ids;
pub mod time;

pub use division::Division;
pub use ids::LeagueId;
pub use time::Season;
