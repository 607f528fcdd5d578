use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::league::store::ResultStore;
use crate::models::match_result::{MatchResult, StoredMatchResult};

const RESULT_COLUMNS: &str =
    "id, match_day, team_blue, team_red, score_blue, score_red, winner, loser, is_bye_win, created_at";

/// Postgres-backed store of recorded match results.
#[derive(Debug, Clone)]
pub struct PgResultStore {
    pool: PgPool,
}

impl PgResultStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_stored(&self) -> Result<Vec<StoredMatchResult>, StoreError> {
        let rows = sqlx::query_as::<_, StoredMatchResult>(&format!(
            "SELECT {} FROM match_results ORDER BY match_day ASC, created_at ASC",
            RESULT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn insert(&self, result: &MatchResult) -> Result<StoredMatchResult, StoreError> {
        let stored = sqlx::query_as::<_, StoredMatchResult>(&format!(
            r#"
            INSERT INTO match_results
                (id, match_day, team_blue, team_red, score_blue, score_red, winner, loser, is_bye_win)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            RESULT_COLUMNS
        ))
        .bind(Uuid::new_v4())
        .bind(result.match_day)
        .bind(&result.team_blue)
        .bind(&result.team_red)
        .bind(result.score_blue)
        .bind(result.score_red)
        .bind(&result.winner)
        .bind(&result.loser)
        .bind(result.is_bye_win)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(
            "Recorded result {} on match day {}: {} {}-{} {}",
            stored.id,
            stored.result.match_day,
            stored.result.team_blue,
            stored.result.score_blue,
            stored.result.score_red,
            stored.result.team_red
        );
        Ok(stored)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let outcome = sqlx::query("DELETE FROM match_results WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if outcome.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ResultStore for PgResultStore {
    async fn list_results(&self) -> Result<Vec<MatchResult>, StoreError> {
        Ok(self
            .list_stored()
            .await?
            .into_iter()
            .map(|stored| stored.result)
            .collect())
    }
}
