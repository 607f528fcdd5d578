use sqlx::PgPool;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::schedule::{CreateFixtureRequest, Fixture};

pub async fn list_fixtures(pool: &PgPool, match_day: Option<i32>) -> Result<Vec<Fixture>, StoreError> {
    let fixtures = sqlx::query_as::<_, Fixture>(
        r#"
        SELECT id, match_day, team_blue, team_red, scheduled_at, created_at
        FROM schedule
        WHERE ($1::INT4 IS NULL OR match_day = $1)
        ORDER BY match_day ASC, scheduled_at ASC NULLS LAST, created_at ASC
        "#,
    )
    .bind(match_day)
    .fetch_all(pool)
    .await?;
    Ok(fixtures)
}

pub async fn create_fixture(pool: &PgPool, request: &CreateFixtureRequest) -> Result<Fixture, StoreError> {
    let fixture = sqlx::query_as::<_, Fixture>(
        r#"
        INSERT INTO schedule (id, match_day, team_blue, team_red, scheduled_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, match_day, team_blue, team_red, scheduled_at, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.match_day)
    .bind(&request.team_blue)
    .bind(&request.team_red)
    .bind(request.scheduled_at)
    .fetch_one(pool)
    .await?;

    tracing::info!(
        "Scheduled {} vs {} on match day {}",
        fixture.team_blue,
        fixture.team_red,
        fixture.match_day
    );
    Ok(fixture)
}

pub async fn delete_fixture(pool: &PgPool, id: Uuid) -> Result<(), StoreError> {
    let outcome = sqlx::query("DELETE FROM schedule WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if outcome.rows_affected() == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
