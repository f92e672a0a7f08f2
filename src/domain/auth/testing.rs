//! In-memory fakes for the auth ports, shared by unit tests across layers.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

use super::entities::{LoginSession, User};
use super::errors::AuthError;
use super::ports::{
  Clock, PasswordHasher, SessionRepository, TokenGenerator, TokenHasher, UserRepository,
};
use super::value_objects::{
  Email, HashedPassword, HashedSessionToken, Name, RawPassword, SessionToken,
};

#[derive(Default)]
pub struct InMemoryUserRepository {
  users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: &User) -> Result<(), AuthError> {
    let mut users = self.users.lock().unwrap();

    if users.iter().any(|u| u.username() == user.username()) {
      return Err(AuthError::DuplicateUsername);
    }
    if users.iter().any(|u| u.email() == user.email()) {
      return Err(AuthError::DuplicateEmail);
    }

    users.push(user.clone());
    Ok(())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.id() == id).cloned())
  }

  async fn find_by_name(&self, name: &Name) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.username() == name).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let users = self.users.lock().unwrap();
    Ok(users.iter().find(|u| u.email() == email).cloned())
  }
}

#[derive(Default)]
pub struct InMemorySessionRepository {
  sessions: Mutex<Vec<LoginSession>>,
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
  async fn create(&self, session: &LoginSession) -> Result<(), AuthError> {
    self.sessions.lock().unwrap().push(session.clone());
    Ok(())
  }

  async fn find_candidates_by_user(&self, user_id: Uuid) -> Result<Vec<LoginSession>, AuthError> {
    let sessions = self.sessions.lock().unwrap();
    Ok(
      sessions
        .iter()
        .filter(|s| s.user_id() == user_id)
        .cloned()
        .collect(),
    )
  }

  async fn delete_by_id(&self, session_id: Uuid) -> Result<(), AuthError> {
    self.sessions.lock().unwrap().retain(|s| s.id() != session_id);
    Ok(())
  }
}

/// Deterministic stand-in for the password hasher.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
  async fn hash(&self, password: &RawPassword) -> Result<HashedPassword, AuthError> {
    HashedPassword::new(format!("plain${}", password.as_str())).map_err(AuthError::from)
  }

  async fn verify(
    &self,
    password: &RawPassword,
    hashed_password: &HashedPassword,
  ) -> Result<bool, AuthError> {
    Ok(hashed_password.as_str() == format!("plain${}", password.as_str()))
  }
}

static TOKEN_HASH_NONCE: AtomicU64 = AtomicU64::new(0);

/// Token-hasher fake that mimics the salted-hash property: hashing the same
/// token twice yields different outputs, so lookups must go through
/// `verify`, exactly like the real Argon2 implementation.
pub struct PlainTokenHasher;

#[async_trait]
impl TokenHasher for PlainTokenHasher {
  async fn hash(&self, token: &SessionToken) -> Result<HashedSessionToken, AuthError> {
    let nonce = TOKEN_HASH_NONCE.fetch_add(1, Ordering::Relaxed);
    HashedSessionToken::new(format!("fake${nonce}${}", token.as_str())).map_err(AuthError::from)
  }

  async fn verify(
    &self,
    token: &SessionToken,
    hashed_token: &HashedSessionToken,
  ) -> Result<bool, AuthError> {
    Ok(
      hashed_token
        .as_str()
        .rsplit_once('$')
        .is_some_and(|(_, suffix)| suffix == token.as_str()),
    )
  }
}

pub struct RandomTokenGenerator;

#[async_trait]
impl TokenGenerator for RandomTokenGenerator {
  async fn generate(&self) -> Result<SessionToken, AuthError> {
    let mut bytes = [0u8; SessionToken::TOKEN_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    Ok(SessionToken::from_bytes(bytes))
  }
}

/// Clock that only moves when a test tells it to.
pub struct FixedClock {
  now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
  pub fn at(now: DateTime<Utc>) -> Self {
    Self { now: Mutex::new(now) }
  }

  pub fn advance(&self, by: Duration) {
    let mut now = self.now.lock().unwrap();
    *now += by;
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    *self.now.lock().unwrap()
  }
}
