use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::schedule;
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::schedule::{CreateFixtureRequest, ScheduleQuery};

pub async fn list_schedule(
    query: web::Query<ScheduleQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let fixtures = schedule::list_fixtures(pool.get_ref(), query.match_day).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Schedule retrieved successfully", fixtures)))
}

#[tracing::instrument(
    name = "Create fixture",
    skip(request, pool),
    fields(match_day = request.match_day)
)]
pub async fn create_fixture(
    request: web::Json<CreateFixtureRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let request = LeagueValidator::new().validate_fixture(&request)?;
    let fixture = schedule::create_fixture(pool.get_ref(), &request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Fixture created successfully", fixture)))
}

#[tracing::instrument(name = "Delete fixture", skip(pool))]
pub async fn delete_fixture(fixture_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    schedule::delete_fixture(pool.get_ref(), fixture_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Fixture deleted successfully")))
}
