use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::league::{League, LeagueStatus};
use crate::domain::matches::Match;
use crate::domain::repositories::{
    LeagueRepository, MatchRepository, RepositoryError, RepositoryResult, TeamRepository, User,
    UserRepository,
};
use crate::domain::team::Team;
use crate::domain::user::Email;

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    leagues: Vec<League>,
    teams: Vec<Team>,
    matches: Vec<Match>,
}

/// Process-local store implementing every repository trait
///
/// Mirrors the PostgreSQL constraints that callers rely on: the
/// one-team-per-captain rule, unique emails, and references from teams and
/// matches. Every check-and-write happens under a single write lock.
/// Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn upsert<T: Clone>(rows: &mut Vec<T>, row: &T, same: impl Fn(&T) -> bool) {
    match rows.iter_mut().find(|r| same(r)) {
        Some(existing) => *existing = row.clone(),
        None => rows.push(row.clone()),
    }
}

fn sorted_matches(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| (m.scheduled_at(), m.id()));
    matches
}

fn sorted_by_name(mut leagues: Vec<League>) -> Vec<League> {
    leagues.sort_by(|a, b| a.name().cmp(b.name()).then(a.id().cmp(&b.id())));
    leagues
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> RepositoryResult<Uuid> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict(
                "Email already registered".to_string(),
            ));
        }

        let id = user.id;
        tables.users.push(user);
        Ok(id)
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| &u.email == email).cloned())
    }
}

#[async_trait]
impl LeagueRepository for InMemoryStore {
    async fn save(&self, league: &League) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        upsert(&mut tables.leagues, league, |l| l.id() == league.id());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<League>> {
        let tables = self.tables.read().await;
        Ok(tables.leagues.iter().find(|l| l.id() == id).cloned())
    }

    async fn find_public(&self) -> RepositoryResult<Vec<League>> {
        let tables = self.tables.read().await;
        let leagues = tables
            .leagues
            .iter()
            .filter(|l| l.is_active() && !l.is_private())
            .cloned()
            .collect();
        Ok(sorted_by_name(leagues))
    }

    async fn find_by_city(&self, city: &str) -> RepositoryResult<Vec<League>> {
        let needle = city.to_lowercase();
        let tables = self.tables.read().await;
        let leagues = tables
            .leagues
            .iter()
            .filter(|l| l.is_active() && l.city().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(sorted_by_name(leagues))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> RepositoryResult<Vec<League>> {
        let tables = self.tables.read().await;
        let mut leagues: Vec<League> = tables
            .leagues
            .iter()
            .filter(|l| l.is_owned_by(owner_id))
            .cloned()
            .collect();
        leagues.sort_by(|a, b| b.created_at().cmp(&a.created_at()).then(a.id().cmp(&b.id())));
        Ok(leagues)
    }

    async fn find_archived(&self) -> RepositoryResult<Vec<League>> {
        let tables = self.tables.read().await;
        let leagues = tables
            .leagues
            .iter()
            .filter(|l| l.status() == LeagueStatus::Archived)
            .cloned()
            .collect();
        Ok(sorted_by_name(leagues))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.leagues.iter().any(|l| l.id() == id) {
            return Err(RepositoryError::NotFound(format!("League {}", id)));
        }
        let referenced = tables.teams.iter().any(|t| t.league_id() == id)
            || tables.matches.iter().any(|m| m.league_id() == id);
        if referenced {
            return Err(RepositoryError::Conflict(
                "League still has teams or matches".to_string(),
            ));
        }

        tables.leagues.retain(|l| l.id() != id);
        Ok(())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn create(&self, team: &Team) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.leagues.iter().any(|l| l.id() == team.league_id()) {
            return Err(RepositoryError::MissingReference(
                "Team references a missing league".to_string(),
            ));
        }
        let capped = !team.owner_exempt()
            && tables.teams.iter().any(|t| {
                !t.owner_exempt()
                    && t.league_id() == team.league_id()
                    && t.captain_id() == team.captain_id()
            });
        if capped {
            return Err(RepositoryError::Conflict(
                "Captain already fields a team in this league".to_string(),
            ));
        }

        tables.teams.push(team.clone());
        Ok(())
    }

    async fn update(&self, team: &Team) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        match tables.teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => {
                *existing = team.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(format!("Team {}", team.id()))),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let tables = self.tables.read().await;
        Ok(tables.teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let tables = self.tables.read().await;
        Ok(tables.teams.clone())
    }

    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Team>> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .iter()
            .filter(|t| t.league_id() == league_id)
            .cloned()
            .collect())
    }

    async fn find_by_captain_in_league(
        &self,
        league_id: Uuid,
        captain_id: Uuid,
    ) -> RepositoryResult<Option<Team>> {
        let tables = self.tables.read().await;
        Ok(tables
            .teams
            .iter()
            .find(|t| t.league_id() == league_id && t.captain_id() == captain_id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.teams.iter().any(|t| t.id() == id) {
            return Err(RepositoryError::NotFound(format!("Team {}", id)));
        }
        if tables.matches.iter().any(|m| m.involves(id)) {
            return Err(RepositoryError::Conflict("Team still has matches".to_string()));
        }

        tables.teams.retain(|t| t.id() != id);
        Ok(())
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn save(&self, m: &Match) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let league_known = tables.leagues.iter().any(|l| l.id() == m.league_id());
        let teams_known = [m.home_team_id(), m.away_team_id()]
            .iter()
            .all(|id| tables.teams.iter().any(|t| t.id() == *id));
        if !league_known || !teams_known {
            return Err(RepositoryError::MissingReference(
                "Match references a missing league or team".to_string(),
            ));
        }

        upsert(&mut tables.matches, m, |existing| existing.id() == m.id());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Match>> {
        let tables = self.tables.read().await;
        Ok(tables.matches.iter().find(|m| m.id() == id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Match>> {
        let tables = self.tables.read().await;
        Ok(sorted_matches(tables.matches.clone()))
    }

    async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Match>> {
        let tables = self.tables.read().await;
        Ok(sorted_matches(
            tables
                .matches
                .iter()
                .filter(|m| m.league_id() == league_id)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Match>> {
        let tables = self.tables.read().await;
        Ok(sorted_matches(
            tables
                .matches
                .iter()
                .filter(|m| m.involves(team_id))
                .cloned()
                .collect(),
        ))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.matches.len();
        tables.matches.retain(|m| m.id() != id);
        if tables.matches.len() == before {
            return Err(RepositoryError::NotFound(format!("Match {}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::league::SportType;
    use chrono::Utc;

    async fn seeded() -> (InMemoryStore, League) {
        let store = InMemoryStore::new();
        let league = League::new(
            "Liga".to_string(),
            "Bydgoszcz".to_string(),
            SportType::Football,
            false,
            Uuid::new_v4(),
        )
        .unwrap();
        LeagueRepository::save(&store, &league).await.unwrap();
        (store, league)
    }

    #[tokio::test]
    async fn second_capped_team_conflicts() {
        let (store, league) = seeded().await;
        let captain = Uuid::new_v4();

        let first = Team::new("One".to_string(), &league, captain).unwrap();
        let second = Team::new("Two".to_string(), &league, captain).unwrap();

        TeamRepository::create(&store, &first).await.unwrap();
        let result = TeamRepository::create(&store, &second).await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn team_for_unknown_league_is_a_missing_reference() {
        let (_, league) = seeded().await;
        let empty = InMemoryStore::new();
        let team = Team::new("Lost".to_string(), &league, Uuid::new_v4()).unwrap();

        let result = TeamRepository::create(&empty, &team).await;

        assert!(matches!(result, Err(RepositoryError::MissingReference(_))));
    }

    #[tokio::test]
    async fn owner_teams_are_not_capped() {
        let (store, league) = seeded().await;
        let owner = league.owner_id();

        for name in ["One", "Two", "Three"] {
            let team = Team::new(name.to_string(), &league, owner).unwrap();
            TeamRepository::create(&store, &team).await.unwrap();
        }

        let teams = TeamRepository::find_by_league(&store, league.id())
            .await
            .unwrap();
        assert_eq!(teams.len(), 3);
    }

    #[tokio::test]
    async fn league_with_teams_cannot_be_deleted() {
        let (store, league) = seeded().await;
        let team = Team::new("One".to_string(), &league, Uuid::new_v4()).unwrap();
        TeamRepository::create(&store, &team).await.unwrap();

        let result = LeagueRepository::delete(&store, league.id()).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));

        TeamRepository::delete(&store, team.id()).await.unwrap();
        LeagueRepository::delete(&store, league.id()).await.unwrap();
    }

    #[tokio::test]
    async fn match_with_unknown_team_is_refused() {
        let (store, league) = seeded().await;
        let team = Team::new("One".to_string(), &league, Uuid::new_v4()).unwrap();
        TeamRepository::create(&store, &team).await.unwrap();

        let m = Match::schedule(
            league.id(),
            team.id(),
            Uuid::new_v4(),
            Utc::now(),
            league.owner_id(),
        );

        let result = MatchRepository::save(&store, &m).await;
        assert!(matches!(result, Err(RepositoryError::MissingReference(_))));
    }

    #[tokio::test]
    async fn city_search_is_case_insensitive_and_active_only() {
        let (store, mut league) = seeded().await;

        let found = store.find_by_city("bydg").await.unwrap();
        assert_eq!(found.len(), 1);

        league.archive().unwrap();
        LeagueRepository::save(&store, &league).await.unwrap();

        assert!(store.find_by_city("BYDG").await.unwrap().is_empty());
        assert_eq!(store.find_archived().await.unwrap().len(), 1);
    }
}
