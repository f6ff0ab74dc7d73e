//! Integration tests for the PostgreSQL repository layer
//!
//! These tests verify that repository implementations correctly interact
//! with the database, including the constraints the admission rules lean on.
//! They need a reachable `DATABASE_URL` and are ignored by default:
//!
//! ```text
//! DATABASE_URL=postgresql://... cargo test --test repository_integration -- --ignored
//! ```

use chrono::Utc;
use ligamanager_api::domain::league::{League, LeagueChanges, SportType};
use ligamanager_api::domain::matches::{Match, MatchChanges, MatchStatus};
use ligamanager_api::domain::repositories::{
    LeagueRepository, MatchRepository, RepositoryError, TeamRepository, User, UserRepository,
};
use ligamanager_api::domain::team::Team;
use ligamanager_api::domain::user::Email;
use ligamanager_api::infrastructure::repositories::{
    PostgresLeagueRepository, PostgresMatchRepository, PostgresTeamRepository,
    PostgresUserRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Set up test database connection pool with the schema applied
async fn setup_test_db() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create a user row to own leagues and captain teams
async fn create_test_user(pool: &PgPool) -> Uuid {
    let repo = PostgresUserRepository::new(pool.clone());
    let email = Email::new(format!("user-{}@ligamanager.test", Uuid::new_v4())).unwrap();

    repo.create(User {
        id: Uuid::new_v4(),
        email,
        password_hash: "not-a-real-hash".to_string(),
    })
    .await
    .expect("Failed to create test user")
}

async fn create_test_league(pool: &PgPool, owner_id: Uuid, is_private: bool) -> League {
    let repo = PostgresLeagueRepository::new(pool.clone());
    let league = League::new(
        format!("League {}", Uuid::new_v4()),
        "Braga".to_string(),
        SportType::Volleyball,
        is_private,
        owner_id,
    )
    .unwrap();
    repo.save(&league).await.expect("Failed to save league");

    league
}

/// Clean up everything hanging off a league
async fn cleanup_league(pool: &PgPool, league_id: Uuid) {
    for sql in [
        "DELETE FROM matches WHERE league_id = $1",
        "DELETE FROM teams WHERE league_id = $1",
        "DELETE FROM leagues WHERE id = $1",
    ] {
        sqlx::query(sql)
            .bind(league_id)
            .execute(pool)
            .await
            .expect("Failed to clean up league");
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_user_repository_create_and_find_by_email() {
    let pool = setup_test_db().await;
    let repo = PostgresUserRepository::new(pool.clone());
    let email = Email::new(format!("Find-{}@LigaManager.test", Uuid::new_v4())).unwrap();

    let user_id = repo
        .create(User {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash: "hash".to_string(),
        })
        .await
        .unwrap();

    let found = repo.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, user_id);
    assert_eq!(found.email, email);

    // Duplicate email is a conflict
    let dup = repo
        .create(User {
            id: Uuid::new_v4(),
            email,
            password_hash: "hash".to_string(),
        })
        .await;
    assert!(matches!(dup, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_league_repository_save_update_and_queries() {
    let pool = setup_test_db().await;
    let owner = create_test_user(&pool).await;
    let repo = PostgresLeagueRepository::new(pool.clone());
    let mut league = create_test_league(&pool, owner, false).await;

    let found = repo.find_by_id(league.id()).await.unwrap().unwrap();
    assert_eq!(found.name(), league.name());
    assert_eq!(found.sport_type(), SportType::Volleyball);

    league
        .apply(LeagueChanges {
            city: Some("Coimbra".to_string()),
            ..Default::default()
        })
        .unwrap();
    repo.save(&league).await.unwrap();

    let by_city = repo.find_by_city("coim").await.unwrap();
    assert!(by_city.iter().any(|l| l.id() == league.id()));

    let mine = repo.find_by_owner(owner).await.unwrap();
    assert_eq!(mine.len(), 1);

    league.archive().unwrap();
    repo.save(&league).await.unwrap();

    let public = repo.find_public().await.unwrap();
    assert!(!public.iter().any(|l| l.id() == league.id()));
    let archived = repo.find_archived().await.unwrap();
    assert!(archived.iter().any(|l| l.id() == league.id()));

    cleanup_league(&pool, league.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_private_league_hidden_from_public_listing() {
    let pool = setup_test_db().await;
    let owner = create_test_user(&pool).await;
    let repo = PostgresLeagueRepository::new(pool.clone());
    let league = create_test_league(&pool, owner, true).await;

    let public = repo.find_public().await.unwrap();
    assert!(!public.iter().any(|l| l.id() == league.id()));

    cleanup_league(&pool, league.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_one_team_per_captain_index() {
    let pool = setup_test_db().await;
    let owner = create_test_user(&pool).await;
    let captain = create_test_user(&pool).await;
    let league = create_test_league(&pool, owner, false).await;
    let repo = PostgresTeamRepository::new(pool.clone());

    let first = Team::new("First".to_string(), &league, captain).unwrap();
    repo.create(&first).await.unwrap();

    let second = Team::new("Second".to_string(), &league, captain).unwrap();
    let result = repo.create(&second).await;
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    // The owner is exempt from the index
    for name in ["Owner A", "Owner B"] {
        let team = Team::new(name.to_string(), &league, owner).unwrap();
        repo.create(&team).await.unwrap();
    }

    let teams = repo.find_by_league(league.id()).await.unwrap();
    assert_eq!(teams.len(), 3);

    let captained = repo
        .find_by_captain_in_league(league.id(), captain)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(captained.id(), first.id());

    cleanup_league(&pool, league.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_team_with_unknown_captain_is_missing_reference() {
    let pool = setup_test_db().await;
    let owner = create_test_user(&pool).await;
    let league = create_test_league(&pool, owner, false).await;
    let repo = PostgresTeamRepository::new(pool.clone());

    let team = Team::new("Ghost".to_string(), &league, Uuid::new_v4()).unwrap();
    let result = repo.create(&team).await;
    assert!(matches!(result, Err(RepositoryError::MissingReference(_))));

    cleanup_league(&pool, league.id()).await;
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn test_match_repository_result_round_trip() {
    let pool = setup_test_db().await;
    let owner = create_test_user(&pool).await;
    let league = create_test_league(&pool, owner, false).await;
    let teams = PostgresTeamRepository::new(pool.clone());
    let repo = PostgresMatchRepository::new(pool.clone());

    let home = Team::new("Home".to_string(), &league, owner).unwrap();
    let away = Team::new("Away".to_string(), &league, owner).unwrap();
    teams.create(&home).await.unwrap();
    teams.create(&away).await.unwrap();

    let mut m = Match::schedule(league.id(), home.id(), away.id(), Utc::now(), owner);
    repo.save(&m).await.unwrap();

    m.record_update(MatchChanges {
        home_score: Some(3),
        away_score: Some(1),
        scheduled_at: None,
    })
    .unwrap();
    repo.save(&m).await.unwrap();

    let found = repo.find_by_id(m.id()).await.unwrap().unwrap();
    assert_eq!(found.status(), MatchStatus::Finished);
    assert_eq!(found.home_score(), Some(3));
    assert_eq!(found.away_score(), Some(1));

    assert_eq!(repo.find_by_league(league.id()).await.unwrap().len(), 1);
    assert_eq!(repo.find_by_team(away.id()).await.unwrap().len(), 1);

    // A team with matches cannot be deleted
    let result = teams.delete(home.id()).await;
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    repo.delete(m.id()).await.unwrap();
    assert!(repo.find_by_id(m.id()).await.unwrap().is_none());

    cleanup_league(&pool, league.id()).await;
}
