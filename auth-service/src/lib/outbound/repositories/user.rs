use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::CredentialStore;
use crate::user::errors::AuthError;

/// Credential store backed by the Postgres users table.
///
/// The table's unique index on username is the serialization point for
/// concurrent registrations across service instances.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    role: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, AuthError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            password_hash: self.password_hash,
            role: self.role,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.map(UserRow::into_user).transpose()
    }

    async fn create(&self, username: &Username, password_hash: &str) -> Result<User, AuthError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, role
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // An atomic check-and-insert: concurrent registrations
                // surface here as a constraint violation, never as a race
                // against a pre-check.
                if db_err.is_unique_violation() {
                    return AuthError::DuplicateUsername;
                }
            }
            storage_error(e)
        })?
        .into_user()
    }
}

fn storage_error(e: sqlx::Error) -> AuthError {
    tracing::error!(error = %e, "Credential store query failed");
    AuthError::StorageUnavailable(e.to_string())
}
