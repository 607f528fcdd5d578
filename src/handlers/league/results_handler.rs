use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::results::PgResultStore;
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::match_result::{RecordResultRequest, ResultsQuery, StoredMatchResult};

/// List recorded results, optionally restricted to one stage
#[tracing::instrument(name = "List match results", skip(pool), fields(stage = ?query.stage))]
pub async fn list_results(
    query: web::Query<ResultsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let stage = query.stage;
    let results: Vec<StoredMatchResult> = PgResultStore::new(pool.get_ref().clone())
        .list_stored()
        .await?
        .into_iter()
        .filter(|stored| stage.includes(&stored.result))
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success("Results retrieved successfully", results)))
}

/// Record a match result
#[tracing::instrument(
    name = "Record match result",
    skip(request, pool),
    fields(
        match_day = request.match_day,
        team_blue = %request.team_blue,
        team_red = %request.team_red
    )
)]
pub async fn record_result(
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let result = LeagueValidator::new().validate_result(&request)?;
    let stored = PgResultStore::new(pool.get_ref().clone()).insert(&result).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Result recorded successfully", stored)))
}

/// Delete a recorded result
#[tracing::instrument(name = "Delete match result", skip(pool))]
pub async fn delete_result(result_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    PgResultStore::new(pool.get_ref().clone()).delete(result_id).await?;
    tracing::info!("Deleted result {}", result_id);

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Result deleted successfully")))
}
