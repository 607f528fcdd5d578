use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::results::PgResultStore;
use crate::db::teams::PgTeamRegistry;
use crate::error::AppError;
use crate::league::standings::StandingsService;
use crate::models::common::ApiResponse;
use crate::models::standings::StandingsResponse;

fn standings_service(pool: &PgPool) -> StandingsService<PgResultStore, PgTeamRegistry> {
    StandingsService::new(PgResultStore::new(pool.clone()), PgTeamRegistry::new(pool.clone()))
}

/// Get the full league table
#[tracing::instrument(name = "Get league standings", skip(pool))]
pub async fn get_league_standings(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let standings = standings_service(pool.get_ref()).league_table().await;

    let response = StandingsResponse {
        total_teams: standings.len(),
        standings,
        generated_at: Utc::now(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success("Standings retrieved successfully", response)))
}

/// Get a single team's line of the league table
#[tracing::instrument(name = "Get team standing", skip(team, pool), fields(team = %team))]
pub async fn get_team_standing(team: String, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    match standings_service(pool.get_ref()).team_standing(team.trim()).await {
        Some(row) => Ok(HttpResponse::Ok().json(ApiResponse::success("Team standing retrieved successfully", row))),
        None => {
            tracing::info!("No standing for unknown team {}", team);
            Err(AppError::NotFound(format!("Team {} not found", team)))
        }
    }
}
