use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::domain::matches::{Match, MatchChanges, MatchStatus};
use crate::services::NewMatch;

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
}

/// Result and/or new date; both scores are needed to finish a match
#[derive(Debug, Deserialize)]
pub struct UpdateMatchRequest {
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub scheduled_at: DateTime<Utc>,
    pub status: MatchStatus,
    pub submitted_by: Option<Uuid>,
}

impl From<&Match> for MatchResponse {
    fn from(m: &Match) -> Self {
        Self {
            id: m.id(),
            league_id: m.league_id(),
            home_team_id: m.home_team_id(),
            away_team_id: m.away_team_id(),
            home_score: m.home_score(),
            away_score: m.away_score(),
            scheduled_at: m.scheduled_at(),
            status: m.status(),
            submitted_by: m.submitted_by(),
        }
    }
}

fn to_responses(matches: &[Match]) -> Json<Vec<MatchResponse>> {
    Json(matches.iter().map(MatchResponse::from).collect())
}

/// Schedule a match; only the league owner may do this
///
/// POST /api/matches
pub async fn create_match(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), ApiError> {
    let m = state
        .matches
        .create_match(
            user_id,
            NewMatch {
                league_id: req.league_id,
                home_team_id: req.home_team_id,
                away_team_id: req.away_team_id,
                scheduled_at: req.scheduled_at,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MatchResponse::from(&m))))
}

/// GET /api/matches
pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = state.matches.list_all().await?;
    Ok(to_responses(&matches))
}

/// GET /api/matches/:id
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchResponse>, ApiError> {
    let m = state.matches.get(id).await?;
    Ok(Json(MatchResponse::from(&m)))
}

/// GET /api/matches/league/:league_id
pub async fn get_matches_by_league(
    State(state): State<AppState>,
    Path(league_id): Path<Uuid>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = state.matches.list_by_league(league_id).await?;
    Ok(to_responses(&matches))
}

/// GET /api/matches/team/:team_id
pub async fn get_matches_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<Json<Vec<MatchResponse>>, ApiError> {
    let matches = state.matches.list_by_team(team_id).await?;
    Ok(to_responses(&matches))
}

/// PUT /api/matches/:id
pub async fn update_match(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    let changes = MatchChanges {
        home_score: req.home_score,
        away_score: req.away_score,
        scheduled_at: req.scheduled_at,
    };
    let m = state.matches.update(id, user_id, changes).await?;

    Ok(Json(MatchResponse::from(&m)))
}

/// DELETE /api/matches/:id
pub async fn delete_match(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.matches.delete(id, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
