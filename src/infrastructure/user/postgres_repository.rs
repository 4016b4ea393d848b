//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::user::{User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
///
/// Name uniqueness is backed by the `users_name_key` unique constraint; the
/// pool hands each statement a connection and takes it back on every path.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, password, email FROM users WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, name, password, email FROM users WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user by name: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        sqlx::query("INSERT INTO users (id, name, password, email) VALUES ($1, $2, $3, $4)")
            .bind(user.id().as_str())
            .bind(user.name())
            .bind(user.password_hash())
            .bind(user.email())
            .execute(&self.pool)
            .await
            .map_err(|e| match unique_violation_constraint(&e) {
                Some(constraint) => conflict_for_constraint(constraint.as_deref(), &user),
                None => DomainError::storage(format!("Failed to create user: {}", e)),
            })?;

        Ok(user)
    }

    async fn update(&self, id: &UserId, changes: &UserChanges) -> Result<bool, DomainError> {
        let query = match &changes.password_hash {
            Some(hash) => {
                sqlx::query("UPDATE users SET name = $2, email = $3, password = $4 WHERE id = $1")
                    .bind(id.as_str())
                    .bind(&changes.name)
                    .bind(&changes.email)
                    .bind(hash)
            }
            None => sqlx::query("UPDATE users SET name = $2, email = $3 WHERE id = $1")
                .bind(id.as_str())
                .bind(&changes.name)
                .bind(&changes.email),
        };

        let result = query.execute(&self.pool).await.map_err(|e| {
            if unique_violation_constraint(&e).is_some() {
                DomainError::conflict(format!("Name '{}' already exists", changes.name))
            } else {
                DomainError::storage(format!("Failed to update user: {}", e))
            }
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let read = |column: &str| -> Result<String, DomainError> {
        row.try_get::<String, _>(column)
            .map_err(|e| DomainError::storage(format!("Invalid '{}' column: {}", column, e)))
    };

    let id = read("id")?;
    let user_id = UserId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;

    Ok(User::new(user_id, read("name")?, read("email")?, read("password")?))
}

/// `Some(constraint)` when the error is a unique violation (SQLSTATE 23505)
fn unique_violation_constraint(err: &sqlx::Error) -> Option<Option<String>> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Some(db_err.constraint().map(str::to_string))
        }
        _ => None,
    }
}

fn conflict_for_constraint(constraint: Option<&str>, user: &User) -> DomainError {
    match constraint {
        Some(c) if c.contains("pkey") => DomainError::conflict(format!(
            "User with ID '{}' already exists",
            user.id().as_str()
        )),
        _ => DomainError::conflict(format!("Name '{}' already exists", user.name())),
    }
}
