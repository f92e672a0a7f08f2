use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::errors::ValidationError;
use super::value_objects::{
  Email, HashedPassword, HashedSessionToken, Name, RawPassword, SessionToken, UserRole,
};

// ============================================================================
// User
// ============================================================================

/// User entity corresponding to a row of the `users` table.
#[derive(Debug, Clone)]
pub struct User {
  id: Uuid,
  username: Name,
  email: Email,
  hashed_password: HashedPassword,
  role: UserRole,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user at registration time: fresh id,
  /// `created_at == updated_at == now`.
  pub fn new(
    username: Name,
    email: Email,
    hashed_password: HashedPassword,
    role: UserRole,
    now: DateTime<Utc>,
  ) -> Result<Self, ValidationError> {
    Self::build(Uuid::new_v4(), username, email, hashed_password, role, now, now)
  }

  /// Reconstructs a user from persisted fields.
  pub fn from_persistence(
    id: Uuid,
    username: Name,
    email: Email,
    hashed_password: HashedPassword,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Result<Self, ValidationError> {
    Self::build(id, username, email, hashed_password, role, created_at, updated_at)
  }

  fn build(
    id: Uuid,
    username: Name,
    email: Email,
    hashed_password: HashedPassword,
    role: UserRole,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Result<Self, ValidationError> {
    if id.is_nil() {
      return Err(ValidationError::InvalidUser);
    }

    let created_at = created_at.with_timezone(&Utc);
    let updated_at = updated_at.with_timezone(&Utc);
    if updated_at < created_at {
      return Err(ValidationError::InvalidUser);
    }

    Ok(Self {
      id,
      username,
      email,
      hashed_password,
      role,
      created_at,
      updated_at,
    })
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn username(&self) -> &Name {
    &self.username
  }

  pub fn email(&self) -> &Email {
    &self.email
  }

  pub fn hashed_password(&self) -> &HashedPassword {
    &self.hashed_password
  }

  pub fn role(&self) -> UserRole {
    self.role
  }

  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  pub fn updated_at(&self) -> DateTime<Utc> {
    self.updated_at
  }
}

// ============================================================================
// LoginSession
// ============================================================================

/// An issued session as persisted: only the salted hash of the token is
/// carried, never the plaintext.
#[derive(Debug, Clone)]
pub struct LoginSession {
  id: Uuid,
  user_id: Uuid,
  hashed_token: HashedSessionToken,
  created_at: DateTime<Utc>,
  expires_at: DateTime<Utc>,
}

impl LoginSession {
  /// Creates a new session issued at `issued_at`, expiring after `ttl`.
  pub fn new(
    user_id: Uuid,
    hashed_token: HashedSessionToken,
    issued_at: DateTime<Utc>,
    ttl: Duration,
  ) -> Result<Self, ValidationError> {
    Self::build(Uuid::new_v4(), user_id, hashed_token, issued_at, issued_at + ttl)
  }

  /// Reconstructs a session from persisted fields.
  pub fn from_persistence(
    id: Uuid,
    user_id: Uuid,
    hashed_token: HashedSessionToken,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
  ) -> Result<Self, ValidationError> {
    Self::build(id, user_id, hashed_token, created_at, expires_at)
  }

  fn build(
    id: Uuid,
    user_id: Uuid,
    hashed_token: HashedSessionToken,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
  ) -> Result<Self, ValidationError> {
    if id.is_nil() || user_id.is_nil() {
      return Err(ValidationError::InvalidLoginSession);
    }

    let created_at = created_at.with_timezone(&Utc);
    let expires_at = expires_at.with_timezone(&Utc);
    if expires_at <= created_at {
      return Err(ValidationError::InvalidLoginSession);
    }

    Ok(Self {
      id,
      user_id,
      hashed_token,
      created_at,
      expires_at,
    })
  }

  pub fn id(&self) -> Uuid {
    self.id
  }

  pub fn user_id(&self) -> Uuid {
    self.user_id
  }

  pub fn hashed_token(&self) -> &HashedSessionToken {
    &self.hashed_token
  }

  pub fn created_at(&self) -> DateTime<Utc> {
    self.created_at
  }

  pub fn expires_at(&self) -> DateTime<Utc> {
    self.expires_at
  }

  /// A session expiring exactly at `now` is still valid; validity is the
  /// closed interval `[created_at, expires_at]`.
  pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
    now > self.expires_at
  }
}

// ============================================================================
// SessionData
// ============================================================================

/// The caller-facing session handle: user id plus the plaintext token.
/// Returned exactly once at issuance and never persisted.
#[derive(Debug, Clone)]
pub struct SessionData {
  user_id: Uuid,
  token: SessionToken,
}

impl SessionData {
  pub fn new(user_id: Uuid, token: SessionToken) -> Result<Self, ValidationError> {
    if user_id.is_nil() {
      return Err(ValidationError::InvalidSessionData);
    }

    Ok(Self { user_id, token })
  }

  pub fn user_id(&self) -> Uuid {
    self.user_id
  }

  pub fn token(&self) -> &SessionToken {
    &self.token
  }
}

// ============================================================================
// Credentials
// ============================================================================

/// Credential presented at admin login: a name and the raw password.
#[derive(Debug, Clone)]
pub struct AdminCredential {
  name: Name,
  password: RawPassword,
}

impl AdminCredential {
  pub fn new(name: Name, raw_password: impl Into<String>) -> Result<Self, ValidationError> {
    let password =
      RawPassword::new(raw_password).map_err(|_| ValidationError::InvalidCredential)?;

    Ok(Self { name, password })
  }

  pub fn name(&self) -> &Name {
    &self.name
  }

  pub fn password(&self) -> &RawPassword {
    &self.password
  }
}

/// Credential presented at account registration.
#[derive(Debug, Clone)]
pub struct SignInCredential {
  name: Name,
  email: Email,
  password: RawPassword,
}

impl SignInCredential {
  pub fn new(
    name: impl Into<String>,
    email: impl Into<String>,
    raw_password: impl Into<String>,
  ) -> Result<Self, ValidationError> {
    Ok(Self {
      name: Name::new(name)?,
      email: Email::new(email)?,
      password: RawPassword::new(raw_password)?,
    })
  }

  pub fn name(&self) -> &Name {
    &self.name
  }

  pub fn email(&self) -> &Email {
    &self.email
  }

  pub fn password(&self) -> &RawPassword {
    &self.password
  }
}
