use std::collections::BTreeSet;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::league::store::TeamRegistry;
use crate::models::team::{CreatePlayerRequest, CreateTeamRequest, Player, Team, TeamName};

/// Postgres-backed registry of teams and rosters.
///
/// The league's team set is the union of registered teams, teams named on
/// player rosters and teams named in the fixture schedule.
#[derive(Debug, Clone)]
pub struct PgTeamRegistry {
    pool: PgPool,
}

impl PgTeamRegistry {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_team_records(&self) -> Result<Vec<Team>, StoreError> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT id, name, logo_url, created_at FROM teams ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(teams)
    }

    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team, StoreError> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            INSERT INTO teams (id, name, logo_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, logo_url, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.name)
        .bind(&request.logo_url)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    /// Delete a registered team, returning its name.
    pub async fn delete_team(&self, id: Uuid) -> Result<TeamName, StoreError> {
        let deleted: Option<(String,)> = sqlx::query_as("DELETE FROM teams WHERE id = $1 RETURNING name")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        deleted.map(|(name,)| name).ok_or(StoreError::NotFound)
    }

    /// Roster and fixture rows that still name `team`. While any remain the
    /// team stays in the league table.
    pub async fn count_team_references(&self, team: &str) -> Result<i64, StoreError> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM players WHERE team_name = $1)
                + (SELECT COUNT(*) FROM schedule WHERE team_blue = $1 OR team_red = $1)
            "#,
        )
        .bind(team)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    pub async fn list_players(&self, team: Option<&str>) -> Result<Vec<Player>, StoreError> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, nickname, team_name, role, created_at
            FROM players
            WHERE ($1::TEXT IS NULL OR team_name = $1)
            ORDER BY team_name ASC NULLS LAST, nickname ASC
            "#,
        )
        .bind(team)
        .fetch_all(&self.pool)
        .await?;
        Ok(players)
    }

    pub async fn create_player(&self, request: &CreatePlayerRequest) -> Result<Player, StoreError> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (id, nickname, team_name, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nickname, team_name, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.nickname)
        .bind(&request.team_name)
        .bind(&request.role)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("Created player {} ({})", player.nickname, player.id);
        Ok(player)
    }

    pub async fn delete_player(&self, id: Uuid) -> Result<(), StoreError> {
        let outcome = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if outcome.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Trim, drop blanks and de-duplicate raw team names.
pub fn reconcile_team_names<I>(names: I) -> BTreeSet<TeamName>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[async_trait]
impl TeamRegistry for PgTeamRegistry {
    async fn list_teams(&self) -> Result<BTreeSet<TeamName>, StoreError> {
        let names: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT name FROM teams
            UNION
            SELECT team_name FROM players WHERE team_name IS NOT NULL
            UNION
            SELECT team_blue FROM schedule
            UNION
            SELECT team_red FROM schedule
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reconcile_team_names(names.into_iter().map(|(name,)| name)))
    }
}
