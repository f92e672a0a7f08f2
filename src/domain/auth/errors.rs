use thiserror::Error;

/// Main authentication error type
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Username already exists")]
  DuplicateUsername,

  #[error("Email already exists")]
  DuplicateEmail,

  #[error("No session matches the presented token")]
  SessionNotFound,

  #[error("Session has expired")]
  SessionExpired,

  #[error("Token generation failed: {0}")]
  TokenGeneration(String),

  #[error("Hashing failed: {0}")]
  Hashing(String),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

/// Field-tagged validation errors raised by value object and entity
/// constructors. Invalid values never escape a constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Name must be non-empty")]
  InvalidName,

  #[error("Invalid email address")]
  InvalidEmail,

  #[error("Password must be non-empty")]
  InvalidPassword,

  #[error("Password hash must be non-empty")]
  InvalidPasswordHash,

  #[error("Unknown user role")]
  InvalidRole,

  #[error("Malformed session token")]
  InvalidSessionToken,

  #[error("Invalid user fields")]
  InvalidUser,

  #[error("Invalid login session fields")]
  InvalidLoginSession,

  #[error("Invalid session data")]
  InvalidSessionData,

  #[error("Invalid credential")]
  InvalidCredential,
}

impl ValidationError {
  /// Name of the offending field, used to tag API error payloads.
  pub fn field(&self) -> &'static str {
    match self {
      Self::InvalidName => "name",
      Self::InvalidEmail => "email",
      Self::InvalidPassword => "password",
      Self::InvalidPasswordHash => "password_hash",
      Self::InvalidRole => "role",
      Self::InvalidSessionToken => "token",
      Self::InvalidUser => "user",
      Self::InvalidLoginSession => "session",
      Self::InvalidSessionData => "session",
      Self::InvalidCredential => "credential",
    }
  }
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

// Constraint names from the migrations; unique violations on these columns
// become typed duplicate errors instead of opaque storage failures.
const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(
            db_err
              .constraint()
              .unwrap_or_default()
              .to_string(),
          )
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    match RepositoryError::from(error) {
      RepositoryError::DuplicateKey(constraint) if constraint == USERNAME_CONSTRAINT => {
        AuthError::DuplicateUsername
      }
      RepositoryError::DuplicateKey(constraint) if constraint == EMAIL_CONSTRAINT => {
        AuthError::DuplicateEmail
      }
      other => AuthError::Repository(other),
    }
  }
}
