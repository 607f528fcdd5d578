use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::teams::PgTeamRegistry;
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::team::{CreatePlayerRequest, PlayersQuery};

pub async fn list_players(
    query: web::Query<PlayersQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let team = query.team.as_deref().map(str::trim).filter(|team| !team.is_empty());
    let players = PgTeamRegistry::new(pool.get_ref().clone()).list_players(team).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Players retrieved successfully", players)))
}

#[tracing::instrument(name = "Create player", skip(request, pool), fields(nickname = %request.nickname))]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let request = LeagueValidator::new().validate_player(&request)?;
    let player = PgTeamRegistry::new(pool.get_ref().clone()).create_player(&request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Player created successfully", player)))
}

#[tracing::instrument(name = "Delete player", skip(pool))]
pub async fn delete_player(player_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    PgTeamRegistry::new(pool.get_ref().clone()).delete_player(player_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Player deleted successfully")))
}
