use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryResult;
use crate::domain::user::Email;

/// Registered account
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
}

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; a taken email is a `Conflict`
    async fn create(&self, user: User) -> RepositoryResult<Uuid>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;
}
