//! PostgreSQL Credential Store

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed credential store
///
/// Email uniqueness is the `users_email_key` unique index; a concurrent
/// duplicate insert loses with `23505`.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialStore for PgCredentialStore {
    async fn create_user(&self, new_user: NewUser) -> AuthResult<User> {
        let user = User::create(new_user);

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                name,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.name.as_str())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(e) if is_unique_violation(&e) => Err(AuthError::DuplicateEmail),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                name,
                email,
                password_hash,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            password_hash,
            created_at: self.created_at,
        })
    }
}
