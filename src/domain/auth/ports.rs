use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::{LoginSession, User};
use super::errors::AuthError;
use super::value_objects::{
  Email, HashedPassword, HashedSessionToken, Name, RawPassword, SessionToken,
};

/// Repository trait for user persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user. Uniqueness conflicts on username or email surface
  /// as `AuthError::DuplicateUsername` / `AuthError::DuplicateEmail`.
  async fn create(&self, user: &User) -> Result<(), AuthError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;

  /// Finds a user by their username
  async fn find_by_name(&self, name: &Name) -> Result<Option<User>, AuthError>;

  /// Finds a user by their email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError>;
}

/// Repository trait for session persistence operations
#[async_trait]
pub trait SessionRepository: Send + Sync {
  /// Persists a newly issued session
  async fn create(&self, session: &LoginSession) -> Result<(), AuthError>;

  /// Returns every stored session for the claimed user. The candidate set
  /// carries no ordering guarantee; the caller verifies each hash in turn
  /// because salted hashes cannot be looked up by equality.
  async fn find_candidates_by_user(&self, user_id: Uuid) -> Result<Vec<LoginSession>, AuthError>;

  /// Deletes a specific session
  async fn delete_by_id(&self, session_id: Uuid) -> Result<(), AuthError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a raw password with a fresh salt
  async fn hash(&self, password: &RawPassword) -> Result<HashedPassword, AuthError>;

  /// Verifies a raw password against a stored hash without leaking timing
  async fn verify(
    &self,
    password: &RawPassword,
    hashed_password: &HashedPassword,
  ) -> Result<bool, AuthError>;
}

/// Service trait for session-token hashing.
///
/// The hash is salted and non-deterministic: hashing the same token twice
/// yields different outputs, so stored hashes are matched with `verify`,
/// never with equality.
#[async_trait]
pub trait TokenHasher: Send + Sync {
  async fn hash(&self, token: &SessionToken) -> Result<HashedSessionToken, AuthError>;

  async fn verify(
    &self,
    token: &SessionToken,
    hashed_token: &HashedSessionToken,
  ) -> Result<bool, AuthError>;
}

/// Service trait for secure token generation.
///
/// Entropy-source failure is fatal for the request and is not retried.
#[async_trait]
pub trait TokenGenerator: Send + Sync {
  async fn generate(&self) -> Result<SessionToken, AuthError>;
}

/// Clock abstraction so expiry logic never reads ambient time
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}
