use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, leagues, matches, teams};
use crate::api::state::AppState;

/// Builds the full HTTP router over the given state
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // League routes
        .route(
            "/api/leagues",
            get(leagues::list_public_leagues).post(leagues::create_league),
        )
        .route("/api/leagues/my", get(leagues::list_my_leagues))
        .route("/api/leagues/archived", get(leagues::list_archived_leagues))
        .route("/api/leagues/by-city", get(leagues::list_leagues_by_city))
        .route(
            "/api/leagues/:id",
            get(leagues::get_league)
                .put(leagues::update_league)
                .delete(leagues::delete_league),
        )
        .route("/api/leagues/:id/archive", post(leagues::archive_league))
        .route("/api/leagues/:id/standings", get(leagues::get_standings))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route(
            "/api/teams/league/:league_id",
            get(teams::get_teams_by_league),
        )
        // Match routes
        .route(
            "/api/matches",
            get(matches::list_matches).post(matches::create_match),
        )
        .route(
            "/api/matches/:id",
            get(matches::get_match)
                .put(matches::update_match)
                .delete(matches::delete_match),
        )
        .route(
            "/api/matches/league/:league_id",
            get(matches::get_matches_by_league),
        )
        .route(
            "/api/matches/team/:team_id",
            get(matches::get_matches_by_team),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
