use thiserror::Error;

use crate::domain::auth::errors::{AuthError, RepositoryError};

/// Errors raised by the quiz-result domain
#[derive(Debug, Error)]
pub enum HueError {
  #[error("Invalid hue result")]
  InvalidResult,

  #[error("Invalid hue record")]
  InvalidRecord,

  #[error("Invalid record range")]
  InvalidRange,

  #[error("Result generation failed: {0}")]
  GenerationFailed(String),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error(transparent)]
  Auth(#[from] AuthError),
}

impl HueError {
  /// Name of the offending field, used to tag API error payloads.
  pub fn field(&self) -> &'static str {
    match self {
      Self::InvalidResult => "result",
      Self::InvalidRecord => "record",
      Self::InvalidRange => "data-range",
      Self::GenerationFailed(_) => "result",
      Self::Repository(_) => "server",
      Self::Auth(_) => "session",
    }
  }
}

impl From<sqlx::Error> for HueError {
  fn from(error: sqlx::Error) -> Self {
    HueError::Repository(RepositoryError::from(error))
  }
}
