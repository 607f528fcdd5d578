use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Team names are the identity used by results, rosters and fixtures.
pub type TeamName = String;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: TeamName,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub nickname: String,
    pub team_name: Option<TeamName>,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePlayerRequest {
    pub nickname: String,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct PlayersQuery {
    pub team: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeletedTeamResponse {
    pub name: TeamName,
    /// Players and fixtures still naming the team; non-zero keeps it in the standings.
    pub remaining_references: i64,
}
