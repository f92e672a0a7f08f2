use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::UserRepository;
use crate::domain::auth::value_objects::{Email, HashedPassword, Name, UserRole};

/// Database row structure for the users table
#[derive(Debug, FromRow)]
struct UserRow {
  id: Uuid,
  username: String,
  email: String,
  password_hash: String,
  role: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl UserRow {
  fn into_entity(self) -> Result<User, AuthError> {
    let user = User::from_persistence(
      self.id,
      Name::new(self.username)?,
      Email::new(self.email)?,
      HashedPassword::new(self.password_hash)?,
      UserRole::parse(&self.role)?,
      self.created_at,
      self.updated_at,
    )?;

    Ok(user)
  }
}

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
  /// Inserts the user. Unique-constraint violations come back as typed
  /// duplicate errors through the `From<sqlx::Error>` translation, so two
  /// concurrent sign-ins with the same identity race safely in the database.
  async fn create(&self, user: &User) -> Result<(), AuthError> {
    sqlx::query(
      r#"
            INSERT INTO users (id, username, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
    )
    .bind(user.id())
    .bind(user.username().as_str())
    .bind(user.email().as_str())
    .bind(user.hashed_password().as_str())
    .bind(user.role().as_str())
    .bind(user.created_at())
    .bind(user.updated_at())
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to create user: {}", e);
      AuthError::from(e)
    })?;

    Ok(())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to find user by id: {}", e);
      AuthError::from(e)
    })?;

    row.map(UserRow::into_entity).transpose()
  }

  async fn find_by_name(&self, name: &Name) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
    )
    .bind(name.as_str())
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to find user by username: {}", e);
      AuthError::from(e)
    })?;

    row.map(UserRow::into_entity).transpose()
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id, username, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
    )
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to find user by email: {}", e);
      AuthError::from(e)
    })?;

    row.map(UserRow::into_entity).transpose()
  }
}
