use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::domain::repositories::{
    LeagueRepository, MatchRepository, TeamRepository, UserRepository,
};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresLeagueRepository, PostgresMatchRepository, PostgresTeamRepository,
    PostgresUserRepository,
};
use crate::services::{LeagueService, MatchService, TeamService};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub users: Arc<dyn UserRepository>,
    pub leagues: LeagueService,
    pub teams: TeamService,
    pub matches: MatchService,
}

impl AppState {
    /// Wires the services over the given repositories
    pub fn new(
        config: Config,
        users: Arc<dyn UserRepository>,
        leagues: Arc<dyn LeagueRepository>,
        teams: Arc<dyn TeamRepository>,
        matches: Arc<dyn MatchRepository>,
    ) -> Self {
        let policy = config.match_policy;

        Self {
            config: Arc::new(config),
            users,
            leagues: LeagueService::new(leagues.clone(), teams.clone(), matches.clone()),
            teams: TeamService::new(leagues.clone(), teams.clone()),
            matches: MatchService::new(leagues, teams, matches, policy),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(config: Config, pool: PgPool) -> Self {
        Self::new(
            config,
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresLeagueRepository::new(pool.clone())),
            Arc::new(PostgresTeamRepository::new(pool.clone())),
            Arc::new(PostgresMatchRepository::new(pool)),
        )
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(config: Config) -> Self {
        let store = InMemoryStore::new();

        Self::new(
            config,
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }
}
