use super::value_objects::{LeagueStatus, SportType};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// League aggregate root
///
/// A competition container owned by the user who created it. The league's
/// status and visibility decide whether teams and matches may be created
/// under it.
///
/// # Invariants
/// - Name and city cannot be empty
/// - A new league is always `Active`
/// - `Archived` is terminal
///
/// # Example
/// ```
/// use ligamanager_api::domain::league::{League, LeagueStatus, SportType};
/// use uuid::Uuid;
///
/// let league = League::new(
///     "Sunday League".to_string(),
///     "Krakow".to_string(),
///     SportType::Football,
///     false,
///     Uuid::new_v4(),
/// ).expect("valid league");
///
/// assert_eq!(league.status(), LeagueStatus::Active);
/// ```
#[derive(Debug, Clone)]
pub struct League {
    id: Uuid,
    name: String,
    city: String,
    sport_type: SportType,
    is_private: bool,
    owner_id: Uuid,
    status: LeagueStatus,
    created_at: DateTime<Utc>,
}

/// Partial update of league details
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LeagueChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub sport_type: Option<SportType>,
    pub is_private: Option<bool>,
}

impl League {
    /// Creates a new League aggregate
    ///
    /// # Returns
    /// * `Ok(League)` - New active league
    /// * `Err(String)` - If name or city is blank
    pub fn new(
        name: String,
        city: String,
        sport_type: SportType,
        is_private: bool,
        owner_id: Uuid,
    ) -> Result<Self, String> {
        validate_text("Name", &name)?;
        validate_text("City", &city)?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            city,
            sport_type,
            is_private,
            owner_id,
            status: LeagueStatus::Active,
            created_at: Utc::now(),
        })
    }

    /// Applies a partial update
    ///
    /// Validation happens before anything is written, so a rejected update
    /// leaves the league unchanged.
    pub fn apply(&mut self, changes: LeagueChanges) -> Result<(), String> {
        if let Some(name) = &changes.name {
            validate_text("Name", name)?;
        }
        if let Some(city) = &changes.city {
            validate_text("City", city)?;
        }

        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(city) = changes.city {
            self.city = city;
        }
        if let Some(sport_type) = changes.sport_type {
            self.sport_type = sport_type;
        }
        if let Some(is_private) = changes.is_private {
            self.is_private = is_private;
        }

        Ok(())
    }

    /// Archives the league
    ///
    /// # Returns
    /// * `Err(String)` - If the league is already archived
    pub fn archive(&mut self) -> Result<(), String> {
        let next_status = LeagueStatus::Archived;
        if !self.status.can_transition_to(next_status) {
            return Err(format!("Cannot archive league in {} status", self.status));
        }

        self.status = next_status;
        Ok(())
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }

    pub fn is_active(&self) -> bool {
        self.status == LeagueStatus::Active
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn sport_type(&self) -> SportType {
        self.sport_type
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn status(&self) -> LeagueStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a League from persistence layer data
    ///
    /// Bypasses validation; only repository implementations should call this.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: Uuid,
        name: String,
        city: String,
        sport_type: SportType,
        is_private: bool,
        owner_id: Uuid,
        status: LeagueStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            city,
            sport_type,
            is_private,
            owner_id,
            status,
            created_at,
        }
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} cannot be empty", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league() -> League {
        League::new(
            "Liga Okregowa".to_string(),
            "Gdansk".to_string(),
            SportType::Football,
            false,
            Uuid::new_v4(),
        )
        .unwrap()
    }

    #[test]
    fn new_league_is_active() {
        let league = league();

        assert_eq!(league.status(), LeagueStatus::Active);
        assert!(league.is_active());
        assert!(!league.is_private());
    }

    #[test]
    fn blank_name_fails() {
        let result = League::new(
            "   ".to_string(),
            "Gdansk".to_string(),
            SportType::Other,
            false,
            Uuid::new_v4(),
        );

        assert!(result.unwrap_err().contains("Name cannot be empty"));
    }

    #[test]
    fn blank_city_fails() {
        let result = League::new(
            "Liga".to_string(),
            "".to_string(),
            SportType::Other,
            false,
            Uuid::new_v4(),
        );

        assert!(result.unwrap_err().contains("City cannot be empty"));
    }

    #[test]
    fn archive_is_one_way() {
        let mut league = league();

        assert!(league.archive().is_ok());
        assert_eq!(league.status(), LeagueStatus::Archived);
        assert!(league.archive().is_err());
    }

    #[test]
    fn apply_updates_only_given_fields() {
        let mut league = league();

        league
            .apply(LeagueChanges {
                city: Some("Sopot".to_string()),
                is_private: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(league.name(), "Liga Okregowa");
        assert_eq!(league.city(), "Sopot");
        assert!(league.is_private());
    }

    #[test]
    fn rejected_apply_leaves_league_untouched() {
        let mut league = league();

        let result = league.apply(LeagueChanges {
            name: Some("".to_string()),
            city: Some("Sopot".to_string()),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(league.city(), "Gdansk");
    }

    #[test]
    fn ownership() {
        let owner = Uuid::new_v4();
        let league = League::new(
            "Liga".to_string(),
            "Torun".to_string(),
            SportType::Basketball,
            true,
            owner,
        )
        .unwrap();

        assert!(league.is_owned_by(owner));
        assert!(!league.is_owned_by(Uuid::new_v4()));
    }
}
