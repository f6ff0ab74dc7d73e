use crate::domain::league::League;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Team aggregate root
///
/// A participant bound to exactly one league and one captain.
///
/// # Invariants
/// - Name cannot be empty
/// - `league_id` never changes after creation
/// - `owner_exempt` is fixed at creation: it is true when the captain owns the
///   league, and such teams do not count towards the one-team-per-captain cap
///
/// # Example
/// ```
/// use ligamanager_api::domain::league::{League, SportType};
/// use ligamanager_api::domain::team::Team;
/// use uuid::Uuid;
///
/// let owner = Uuid::new_v4();
/// let league = League::new(
///     "Liga".to_string(),
///     "Poznan".to_string(),
///     SportType::Volleyball,
///     false,
///     owner,
/// ).unwrap();
///
/// let team = Team::new("Lech".to_string(), &league, owner).expect("valid team");
/// assert_eq!(team.league_id(), league.id());
/// assert!(team.owner_exempt());
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    league_id: Uuid,
    captain_id: Uuid,
    owner_exempt: bool,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team in `league` captained by `captain_id`
    ///
    /// Admission into the league is not checked here; run
    /// [`can_create_team`](crate::domain::admission::can_create_team) first.
    pub fn new(name: String, league: &League, captain_id: Uuid) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            league_id: league.id(),
            captain_id,
            owner_exempt: league.is_owned_by(captain_id),
            created_at: Utc::now(),
        })
    }

    pub fn rename(&mut self, name: String) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        self.name = name;
        Ok(())
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn league_id(&self) -> Uuid {
        self.league_id
    }

    pub fn captain_id(&self) -> Uuid {
        self.captain_id
    }

    /// Whether the team was registered by the league owner
    pub fn owner_exempt(&self) -> bool {
        self.owner_exempt
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        league_id: Uuid,
        captain_id: Uuid,
        owner_exempt: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            league_id,
            captain_id,
            owner_exempt,
            created_at,
        }
    }
}
