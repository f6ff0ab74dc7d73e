use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::map_write_error;
use crate::domain::repositories::{RepositoryError, RepositoryResult, User, UserRepository};
use crate::domain::user::Email;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<Uuid> {
        sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
            .bind(user.id)
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Email already registered", "User references a missing record"))?;

        Ok(user.id)
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            Email::new(&r.email)
                .map(|email| User {
                    id: r.id,
                    email,
                    password_hash: r.password_hash,
                })
                .map_err(|e| RepositoryError::Database(sqlx::Error::Decode(e.into())))
        })
        .transpose()
    }
}
