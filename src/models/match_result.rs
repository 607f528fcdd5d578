use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Match days at or above this value are knockout/playoff rounds.
pub const KNOCKOUT_MATCH_DAY_START: i32 = 90;

/// A completed match as seen by the standings calculator.
///
/// Scores count games won inside the match (a best-of-3 ends 2-0 or 2-1).
/// Missing numeric fields deserialize to 0.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    #[serde(default)]
    pub match_day: i32,
    #[serde(default)]
    pub team_blue: String,
    #[serde(default)]
    pub team_red: String,
    #[serde(default)]
    pub score_blue: i32,
    #[serde(default)]
    pub score_red: i32,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub loser: Option<String>,
    /// Walkover: the winner advances without a played match.
    #[serde(default)]
    pub is_bye_win: bool,
}

impl MatchResult {
    pub fn is_knockout(&self) -> bool {
        self.match_day >= KNOCKOUT_MATCH_DAY_START
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct StoredMatchResult {
    pub id: Uuid,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub result: MatchResult,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecordResultRequest {
    pub match_day: i32,
    pub team_blue: String,
    pub team_red: String,
    #[serde(default)]
    pub score_blue: i32,
    #[serde(default)]
    pub score_red: i32,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub loser: Option<String>,
    #[serde(default)]
    pub is_bye_win: bool,
}

/// Which part of the tournament a results listing covers.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    League,
    Knockout,
    #[default]
    All,
}

impl Stage {
    pub fn includes(&self, result: &MatchResult) -> bool {
        match self {
            Stage::League => !result.is_knockout(),
            Stage::Knockout => result.is_knockout(),
            Stage::All => true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ResultsQuery {
    #[serde(default)]
    pub stage: Stage,
}
