use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::team::Team;
use crate::services::NewTeam;

/// Request body for creating a team; the caller becomes its captain
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub league_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub league_id: Uuid,
    pub captain_id: Uuid,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            league_id: team.league_id(),
            captain_id: team.captain_id(),
        }
    }
}

/// Create a new team
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let team = state
        .teams
        .create_team(
            user_id,
            NewTeam {
                name: req.name,
                league_id: req.league_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(TeamResponse::from(&team))))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.list_all().await?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.get(id).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Get all teams of a league
///
/// GET /api/teams/league/:league_id
pub async fn get_teams_by_league(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = state.teams.list_by_league(league_id).await?;
    Ok(Json(teams.iter().map(TeamResponse::from).collect()))
}

/// Rename a team
///
/// PUT /api/teams/:id
pub async fn update_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let team = state.teams.rename(id, user_id, req.name).await?;
    Ok(Json(TeamResponse::from(&team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
pub async fn delete_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.teams.delete(id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
