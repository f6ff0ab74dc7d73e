use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::league::{League, LeagueChanges, LeagueStatus, SportType};
use crate::domain::standings::StandingsRow;
use crate::services::NewLeague;

/// Request body for creating a league
#[derive(Debug, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub city: String,
    pub sport_type: SportType,
    #[serde(default)]
    pub is_private: bool,
}

/// Request body for updating a league; absent fields are unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateLeagueRequest {
    pub name: Option<String>,
    pub city: Option<String>,
    pub sport_type: Option<SportType>,
    pub is_private: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: String,
}

#[derive(Debug, Serialize)]
pub struct LeagueResponse {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub sport_type: SportType,
    pub is_private: bool,
    pub owner_id: Uuid,
    pub status: LeagueStatus,
}

impl From<&League> for LeagueResponse {
    fn from(league: &League) -> Self {
        Self {
            id: league.id(),
            name: league.name().to_string(),
            city: league.city().to_string(),
            sport_type: league.sport_type(),
            is_private: league.is_private(),
            owner_id: league.owner_id(),
            status: league.status(),
        }
    }
}

fn to_responses(leagues: &[League]) -> Json<Vec<LeagueResponse>> {
    Json(leagues.iter().map(LeagueResponse::from).collect())
}

/// Create a league owned by the caller
///
/// POST /api/leagues
pub async fn create_league(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<(StatusCode, Json<LeagueResponse>), ApiError> {
    let league = state
        .leagues
        .create_league(
            user_id,
            NewLeague {
                name: req.name,
                city: req.city,
                sport_type: req.sport_type,
                is_private: req.is_private,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(LeagueResponse::from(&league))))
}

/// GET /api/leagues
pub async fn list_public_leagues(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeagueResponse>>, ApiError> {
    let leagues = state.leagues.list_public().await?;
    Ok(to_responses(&leagues))
}

/// GET /api/leagues/by-city?city=
pub async fn list_leagues_by_city(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Result<Json<Vec<LeagueResponse>>, ApiError> {
    let leagues = state.leagues.list_by_city(&query.city).await?;
    Ok(to_responses(&leagues))
}

/// GET /api/leagues/my
pub async fn list_my_leagues(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<Vec<LeagueResponse>>, ApiError> {
    let leagues = state.leagues.list_by_owner(user_id).await?;
    Ok(to_responses(&leagues))
}

/// GET /api/leagues/archived
pub async fn list_archived_leagues(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeagueResponse>>, ApiError> {
    let leagues = state.leagues.list_archived().await?;
    Ok(to_responses(&leagues))
}

/// GET /api/leagues/:id
pub async fn get_league(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LeagueResponse>, ApiError> {
    let league = state.leagues.get(id).await?;
    Ok(Json(LeagueResponse::from(&league)))
}

/// PUT /api/leagues/:id
pub async fn update_league(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateLeagueRequest>,
) -> Result<Json<LeagueResponse>, ApiError> {
    let changes = LeagueChanges {
        name: req.name,
        city: req.city,
        sport_type: req.sport_type,
        is_private: req.is_private,
    };
    let league = state.leagues.update(id, user_id, changes).await?;

    Ok(Json(LeagueResponse::from(&league)))
}

/// POST /api/leagues/:id/archive
pub async fn archive_league(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<LeagueResponse>, ApiError> {
    let league = state.leagues.archive(id, user_id).await?;
    Ok(Json(LeagueResponse::from(&league)))
}

/// DELETE /api/leagues/:id
pub async fn delete_league(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.leagues.delete(id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/leagues/:id/standings
pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<StandingsRow>>, ApiError> {
    let table = state.leagues.standings(id).await?;
    Ok(Json(table))
}
