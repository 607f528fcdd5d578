use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::teams::PgTeamRegistry;
use crate::error::AppError;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::team::{CreateTeamRequest, DeletedTeamResponse};

pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let teams = PgTeamRegistry::new(pool.get_ref().clone()).list_team_records().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Teams retrieved successfully", teams)))
}

#[tracing::instrument(name = "Create team", skip(request, pool), fields(name = %request.name))]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let request = LeagueValidator::new().validate_team(&request)?;
    let team = PgTeamRegistry::new(pool.get_ref().clone()).create_team(&request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success("Team created successfully", team)))
}

#[tracing::instrument(name = "Delete team", skip(pool))]
pub async fn delete_team(team_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let registry = PgTeamRegistry::new(pool.get_ref().clone());
    let name = registry.delete_team(team_id).await?;
    let remaining_references = registry.count_team_references(&name).await?;

    let message = if remaining_references > 0 {
        tracing::warn!(
            "Deleted team {} is still named by {} roster/fixture entries and stays in the standings",
            name,
            remaining_references
        );
        format!(
            "Team deleted; still named by {} roster/fixture entries, so it remains in the standings",
            remaining_references
        )
    } else {
        "Team deleted successfully".to_string()
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        message,
        DeletedTeamResponse { name, remaining_references },
    )))
}
