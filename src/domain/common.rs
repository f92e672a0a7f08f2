use thiserror::Error;

// ============================================================================
// ApiError Value Object
// ============================================================================

/// Raised when any part of an [`ApiError`] would be blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Api error parts must be non-empty")]
pub struct BlankApiErrorPart;

/// The error payload every failing endpoint returns: a machine-readable
/// cause, the offending field, and a human-readable message. All three are
/// required and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
  cause: String,
  field: String,
  message: String,
}

impl ApiError {
  pub fn new(
    cause: impl Into<String>,
    field: impl Into<String>,
    message: impl Into<String>,
  ) -> Result<Self, BlankApiErrorPart> {
    let cause = cause.into().trim().to_string();
    let field = field.into().trim().to_string();
    let message = message.into().trim().to_string();

    if cause.is_empty() || field.is_empty() || message.is_empty() {
      return Err(BlankApiErrorPart);
    }

    Ok(Self {
      cause,
      field,
      message,
    })
  }

  /// The generic payload for failures the client cannot act on.
  pub fn internal() -> Self {
    Self {
      cause: "internal_error".to_string(),
      field: "server".to_string(),
      message: "internal server error".to_string(),
    }
  }

  pub fn cause(&self) -> &str {
    &self.cause
  }

  pub fn field(&self) -> &str {
    &self.field
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}
