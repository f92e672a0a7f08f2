use chrono::Duration;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{
  AdminCredential, LoginSession, SessionData, SignInCredential, User,
};
use super::errors::AuthError;
use super::ports::{
  Clock, PasswordHasher, SessionRepository, TokenGenerator, TokenHasher, UserRepository,
};
use super::value_objects::{SessionToken, UserRole};

/// Default session lifetime applied from the moment of issuance.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
  pub session_ttl: Duration,
}

impl Default for AuthServiceConfig {
  fn default() -> Self {
    Self {
      session_ttl: Duration::hours(DEFAULT_SESSION_TTL_HOURS),
    }
  }
}

/// Authentication service implementing the credential and session flows
pub struct AuthService {
  user_repo: Arc<dyn UserRepository>,
  session_repo: Arc<dyn SessionRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
  token_hasher: Arc<dyn TokenHasher>,
  token_generator: Arc<dyn TokenGenerator>,
  clock: Arc<dyn Clock>,
  config: AuthServiceConfig,
}

impl AuthService {
  pub fn new(
    user_repo: Arc<dyn UserRepository>,
    session_repo: Arc<dyn SessionRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_hasher: Arc<dyn TokenHasher>,
    token_generator: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    config: AuthServiceConfig,
  ) -> Self {
    Self {
      user_repo,
      session_repo,
      password_hasher,
      token_hasher,
      token_generator,
      clock,
      config,
    }
  }

  /// Registers a new account and issues its first session.
  ///
  /// Not idempotent: a second sign-in with the same username or email fails
  /// through the duplicate-constraint path with a typed error.
  ///
  /// # Errors
  /// `AuthError::DuplicateUsername` / `AuthError::DuplicateEmail` when the
  /// storage layer reports a uniqueness conflict; storage and hashing
  /// failures pass through untouched.
  pub async fn sign_in(&self, credential: SignInCredential) -> Result<SessionData, AuthError> {
    let now = self.clock.now();

    let hashed_password = self.password_hasher.hash(credential.password()).await?;

    let user = User::new(
      credential.name().clone(),
      credential.email().clone(),
      hashed_password,
      UserRole::User,
      now,
    )?;

    // Concurrent sign-ins with the same identity are reconciled by the
    // storage uniqueness constraint, not by in-process locking.
    self.user_repo.create(&user).await?;

    self.issue_session(user.id()).await
  }

  /// Authenticates an existing account by name and password.
  ///
  /// An unknown name and a password mismatch both return
  /// `AuthError::InvalidCredentials` so callers cannot enumerate usernames.
  pub async fn login(
    &self,
    credential: AdminCredential,
  ) -> Result<(SessionData, UserRole), AuthError> {
    let user = self
      .user_repo
      .find_by_name(credential.name())
      .await?
      .ok_or(AuthError::InvalidCredentials)?;

    let is_valid = self
      .password_hasher
      .verify(credential.password(), user.hashed_password())
      .await?;

    if !is_valid {
      tracing::debug!(user_id = %user.id(), "password verification failed");
      return Err(AuthError::InvalidCredentials);
    }

    let session = self.issue_session(user.id()).await?;

    Ok((session, user.role()))
  }

  /// Validates a presented token against the user's stored sessions.
  ///
  /// Because token hashes are salted, the stored hash cannot be found by
  /// equality: every candidate session for the claimed user is fetched and
  /// verified in turn. The first session that verifies and has not expired
  /// wins. A session that verifies but is past its expiry yields
  /// `SessionExpired`; an exhausted candidate set yields `SessionNotFound`,
  /// the same error a wrong token produces.
  pub async fn verify_session(
    &self,
    user_id: Uuid,
    token: &SessionToken,
  ) -> Result<LoginSession, AuthError> {
    let now = self.clock.now();
    let candidates = self.session_repo.find_candidates_by_user(user_id).await?;

    let mut matched_expired = false;
    for session in candidates {
      if self.token_hasher.verify(token, session.hashed_token()).await? {
        if session.is_expired(now) {
          matched_expired = true;
          continue;
        }
        return Ok(session);
      }
    }

    if matched_expired {
      return Err(AuthError::SessionExpired);
    }

    Err(AuthError::SessionNotFound)
  }

  /// Deletes the session matching the presented token.
  pub async fn logout(&self, user_id: Uuid, token: &SessionToken) -> Result<(), AuthError> {
    let session = self.verify_session(user_id, token).await?;
    self.session_repo.delete_by_id(session.id()).await
  }

  /// Generates, hashes and persists a fresh session for the user. The
  /// plaintext token leaves this function exactly once, inside the
  /// returned `SessionData`.
  async fn issue_session(&self, user_id: Uuid) -> Result<SessionData, AuthError> {
    let token = self.token_generator.generate().await?;
    let hashed_token = self.token_hasher.hash(&token).await?;

    let session = LoginSession::new(
      user_id,
      hashed_token,
      self.clock.now(),
      self.config.session_ttl,
    )?;

    self.session_repo.create(&session).await?;

    SessionData::new(user_id, token).map_err(AuthError::from)
  }
}
