use std::sync::Arc;

use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::domain::admission::{can_create_team, AdmissionRejection};
use crate::domain::repositories::{LeagueRepository, RepositoryError, TeamRepository};
use crate::domain::team::Team;

/// Details for a new team
#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub league_id: Uuid,
}

/// Team registration and management
#[derive(Clone)]
pub struct TeamService {
    leagues: Arc<dyn LeagueRepository>,
    teams: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(leagues: Arc<dyn LeagueRepository>, teams: Arc<dyn TeamRepository>) -> Self {
        Self { leagues, teams }
    }

    /// Registers a team captained by `captain_id`
    ///
    /// The cap check runs twice: once here against the current snapshot, and
    /// again atomically in the store. A store uniqueness conflict is reported
    /// as the same rejection; a missing league or captain row at insert time
    /// is reported as `LeagueUnavailable`.
    pub async fn create_team(&self, captain_id: Uuid, input: NewTeam) -> ServiceResult<Team> {
        let league = self.leagues.find_by_id(input.league_id).await?;
        let existing = self
            .teams
            .find_by_captain_in_league(input.league_id, captain_id)
            .await?;

        can_create_team(league.as_ref(), captain_id, existing.as_ref())?;
        let league = league.ok_or(AdmissionRejection::LeagueUnavailable)?;

        let team = Team::new(input.name, &league, captain_id).map_err(ServiceError::Validation)?;

        match self.teams.create(&team).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict(_)) => {
                return Err(AdmissionRejection::CaptainAlreadyHasTeam.into())
            }
            Err(RepositoryError::MissingReference(reason)) => {
                tracing::debug!(%reason, "Team insert lost its league");
                return Err(AdmissionRejection::LeagueUnavailable.into());
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(team_id = %team.id(), league_id = %league.id(), %captain_id, "Team created");
        Ok(team)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Team> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Team not found: {}", id)))
    }

    pub async fn list_all(&self) -> ServiceResult<Vec<Team>> {
        Ok(self.teams.find_all().await?)
    }

    pub async fn list_by_league(&self, league_id: Uuid) -> ServiceResult<Vec<Team>> {
        Ok(self.teams.find_by_league(league_id).await?)
    }

    /// Renames a team; allowed for its captain and the league owner
    pub async fn rename(&self, id: Uuid, user_id: Uuid, name: String) -> ServiceResult<Team> {
        let mut team = self.managed(id, user_id).await?;
        team.rename(name).map_err(ServiceError::Validation)?;
        self.teams.update(&team).await?;

        Ok(team)
    }

    /// Deletes a team; allowed for its captain and the league owner
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> ServiceResult<()> {
        self.managed(id, user_id).await?;
        self.teams.delete(id).await?;
        tracing::info!(team_id = %id, "Team deleted");

        Ok(())
    }

    async fn managed(&self, id: Uuid, user_id: Uuid) -> ServiceResult<Team> {
        let team = self.get(id).await?;
        if team.captain_id() == user_id {
            return Ok(team);
        }

        let owns_league = self
            .leagues
            .find_by_id(team.league_id())
            .await?
            .is_some_and(|league| league.is_owned_by(user_id));
        if !owns_league {
            return Err(ServiceError::Forbidden(
                "Only the captain or the league owner can manage this team".to_string(),
            ));
        }

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::domain::league::{League, SportType};
    use crate::domain::repositories::RepositoryResult;
    use crate::infrastructure::repositories::InMemoryStore;

    /// Team store that loses the race: the pre-check sees no team, the insert conflicts
    struct RacingTeams(InMemoryStore);

    #[async_trait]
    impl TeamRepository for RacingTeams {
        async fn create(&self, _team: &Team) -> RepositoryResult<()> {
            Err(RepositoryError::Conflict("teams_one_per_captain_idx".to_string()))
        }

        async fn update(&self, team: &Team) -> RepositoryResult<()> {
            TeamRepository::update(&self.0, team).await
        }

        async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
            TeamRepository::find_by_id(&self.0, id).await
        }

        async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
            TeamRepository::find_all(&self.0).await
        }

        async fn find_by_league(&self, league_id: Uuid) -> RepositoryResult<Vec<Team>> {
            TeamRepository::find_by_league(&self.0, league_id).await
        }

        async fn find_by_captain_in_league(
            &self,
            _league_id: Uuid,
            _captain_id: Uuid,
        ) -> RepositoryResult<Option<Team>> {
            Ok(None)
        }

        async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
            TeamRepository::delete(&self.0, id).await
        }
    }

    async fn open_league(store: &InMemoryStore, owner: Uuid) -> League {
        let league = League::new(
            "Open".to_string(),
            "Faro".to_string(),
            SportType::Basketball,
            false,
            owner,
        )
        .unwrap();
        LeagueRepository::save(store, &league).await.unwrap();
        league
    }

    fn new_team(name: &str, league: &League) -> NewTeam {
        NewTeam {
            name: name.to_string(),
            league_id: league.id(),
        }
    }

    #[tokio::test]
    async fn owner_may_field_several_teams() {
        let store = InMemoryStore::new();
        let owner = Uuid::new_v4();
        let league = open_league(&store, owner).await;
        let service = TeamService::new(Arc::new(store.clone()), Arc::new(store));

        service.create_team(owner, new_team("A", &league)).await.unwrap();
        service.create_team(owner, new_team("B", &league)).await.unwrap();

        assert_eq!(service.list_by_league(league.id()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn captain_limited_to_one_team() {
        let store = InMemoryStore::new();
        let league = open_league(&store, Uuid::new_v4()).await;
        let service = TeamService::new(Arc::new(store.clone()), Arc::new(store));
        let captain = Uuid::new_v4();

        service.create_team(captain, new_team("A", &league)).await.unwrap();
        let result = service.create_team(captain, new_team("B", &league)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Rejected(AdmissionRejection::CaptainAlreadyHasTeam))
        ));
    }

    #[tokio::test]
    async fn lost_insert_race_reports_cap_rejection() {
        let store = InMemoryStore::new();
        let league = open_league(&store, Uuid::new_v4()).await;
        let service = TeamService::new(Arc::new(store.clone()), Arc::new(RacingTeams(store)));

        let result = service.create_team(Uuid::new_v4(), new_team("Late", &league)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Rejected(AdmissionRejection::CaptainAlreadyHasTeam))
        ));
    }

    #[tokio::test]
    async fn league_gone_at_insert_reports_league_unavailable() {
        let leagues = InMemoryStore::new();
        let league = open_league(&leagues, Uuid::new_v4()).await;
        // The team store never saw the league, as if it was deleted after the pre-check
        let service = TeamService::new(Arc::new(leagues), Arc::new(InMemoryStore::new()));

        let result = service.create_team(Uuid::new_v4(), new_team("Orphan", &league)).await;

        assert!(matches!(
            result,
            Err(ServiceError::Rejected(AdmissionRejection::LeagueUnavailable))
        ));
    }

    #[tokio::test]
    async fn empty_name_is_a_validation_error() {
        let store = InMemoryStore::new();
        let league = open_league(&store, Uuid::new_v4()).await;
        let service = TeamService::new(Arc::new(store.clone()), Arc::new(store));

        let result = service.create_team(Uuid::new_v4(), new_team("  ", &league)).await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
