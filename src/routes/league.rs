// src/routes/league.rs
use actix_web::{delete, get, post, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::league::{player_handler, results_handler, schedule_handler, standings_handler, team_handler};
use crate::models::match_result::{RecordResultRequest, ResultsQuery};
use crate::models::schedule::{CreateFixtureRequest, ScheduleQuery};
use crate::models::team::{CreatePlayerRequest, CreateTeamRequest, PlayersQuery};

/// Get the league table
#[get("/standings")]
pub async fn get_standings(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    standings_handler::get_league_standings(pool).await
}

/// Get one team's standing. The tail match lets team names contain `/`.
#[get("/standings/{team:.*}")]
pub async fn get_team_standing(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    standings_handler::get_team_standing(path.into_inner(), pool).await
}

/// List recorded match results
#[get("/results")]
pub async fn list_results(
    query: web::Query<ResultsQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    results_handler::list_results(query, pool).await
}

/// Record a match result
#[post("/results")]
pub async fn record_result(
    request: web::Json<RecordResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    results_handler::record_result(request, pool).await
}

/// Delete a match result
#[delete("/results/{result_id}")]
pub async fn delete_result(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    results_handler::delete_result(path.into_inner(), pool).await
}

#[get("/teams")]
pub async fn list_teams(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    team_handler::list_teams(pool).await
}

#[post("/teams")]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    team_handler::create_team(request, pool).await
}

#[delete("/teams/{team_id}")]
pub async fn delete_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    team_handler::delete_team(path.into_inner(), pool).await
}

/// List players, optionally filtered by team
#[get("/players")]
pub async fn list_players(
    query: web::Query<PlayersQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::list_players(query, pool).await
}

#[post("/players")]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::create_player(request, pool).await
}

#[delete("/players/{player_id}")]
pub async fn delete_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::delete_player(path.into_inner(), pool).await
}

/// Get the fixture schedule
#[get("/schedule")]
pub async fn list_schedule(
    query: web::Query<ScheduleQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    schedule_handler::list_schedule(query, pool).await
}

#[post("/schedule")]
pub async fn create_fixture(
    request: web::Json<CreateFixtureRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    schedule_handler::create_fixture(request, pool).await
}

#[delete("/schedule/{fixture_id}")]
pub async fn delete_fixture(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    schedule_handler::delete_fixture(path.into_inner(), pool).await
}
