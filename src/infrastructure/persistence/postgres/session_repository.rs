use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::domain::auth::entities::LoginSession;
use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::ports::SessionRepository;
use crate::domain::auth::value_objects::HashedSessionToken;

/// Database row structure for the login_sessions table
#[derive(Debug, FromRow)]
struct LoginSessionRow {
  id: Uuid,
  user_id: Uuid,
  token_hash: String,
  created_at: DateTime<Utc>,
  expires_at: DateTime<Utc>,
}

impl LoginSessionRow {
  fn into_entity(self) -> Result<LoginSession, AuthError> {
    let session = LoginSession::from_persistence(
      self.id,
      self.user_id,
      HashedSessionToken::new(self.token_hash)?,
      self.created_at,
      self.expires_at,
    )?;

    Ok(session)
  }
}

/// PostgreSQL implementation of the SessionRepository trait
pub struct PostgresSessionRepository {
  pool: PgPool,
}

impl PostgresSessionRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
  async fn create(&self, session: &LoginSession) -> Result<(), AuthError> {
    sqlx::query(
      r#"
            INSERT INTO login_sessions (id, user_id, token_hash, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
    )
    .bind(session.id())
    .bind(session.user_id())
    .bind(session.hashed_token().as_str())
    .bind(session.created_at())
    .bind(session.expires_at())
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to create session: {}", e);
      AuthError::from(e)
    })?;

    Ok(())
  }

  /// Fetches every stored session for the user. Expired rows are returned
  /// too; expiry is judged by the caller against its own clock.
  async fn find_candidates_by_user(&self, user_id: Uuid) -> Result<Vec<LoginSession>, AuthError> {
    let rows = sqlx::query_as::<_, LoginSessionRow>(
      r#"
            SELECT id, user_id, token_hash, created_at, expires_at
            FROM login_sessions
            WHERE user_id = $1
            "#,
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to find sessions by user_id: {}", e);
      AuthError::from(e)
    })?;

    rows
      .into_iter()
      .map(LoginSessionRow::into_entity)
      .collect()
  }

  async fn delete_by_id(&self, session_id: Uuid) -> Result<(), AuthError> {
    let result = sqlx::query(
      r#"
            DELETE FROM login_sessions
            WHERE id = $1
            "#,
    )
    .bind(session_id)
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to delete session: {}", e);
      AuthError::from(e)
    })?;

    if result.rows_affected() == 0 {
      tracing::warn!(%session_id, "session not found for deletion");
      return Err(AuthError::Repository(RepositoryError::NotFound));
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::testing::{create_test_user, setup_test_db};
  use chrono::Duration;

  fn session_for(user_id: Uuid, hash: &str) -> LoginSession {
    LoginSession::new(
      user_id,
      HashedSessionToken::new(hash).unwrap(),
      Utc::now(),
      Duration::hours(1),
    )
    .unwrap()
  }

  #[tokio::test]
  #[ignore = "needs a Docker daemon"]
  async fn create_then_scan_by_user() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresSessionRepository::new(pool.clone());

    let user_id = create_test_user(&pool).await;
    for i in 0..3 {
      repo
        .create(&session_for(user_id, &format!("hash_{}", i)))
        .await
        .unwrap();
    }

    let candidates = repo.find_candidates_by_user(user_id).await.unwrap();
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|s| s.user_id() == user_id));
  }

  #[tokio::test]
  #[ignore = "needs a Docker daemon"]
  async fn delete_removes_only_the_target() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresSessionRepository::new(pool.clone());

    let user_id = create_test_user(&pool).await;
    let keep = session_for(user_id, "keep");
    let drop = session_for(user_id, "drop");
    repo.create(&keep).await.unwrap();
    repo.create(&drop).await.unwrap();

    repo.delete_by_id(drop.id()).await.unwrap();

    let candidates = repo.find_candidates_by_user(user_id).await.unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id(), keep.id());
  }

  #[tokio::test]
  #[ignore = "needs a Docker daemon"]
  async fn deleting_a_missing_session_is_not_found() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresSessionRepository::new(pool);

    let err = repo.delete_by_id(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(
      err,
      AuthError::Repository(RepositoryError::NotFound)
    ));
  }
}
