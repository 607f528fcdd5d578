use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::team::TeamName;

/// One line of the league table. Derived on every read, never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StandingRow {
    pub team: TeamName,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub goal_difference: i32,
    pub points: u32,
}

impl StandingRow {
    pub fn new(team: impl Into<TeamName>) -> Self {
        Self {
            team: team.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingRow>,
    pub total_teams: usize,
    pub generated_at: DateTime<Utc>,
}
