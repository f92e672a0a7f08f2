use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::AuthError;
use crate::domain::common::ApiError;
use crate::domain::hue::errors::HueError;

use super::dtos::ErrorResponse;

/// HTTP error type mapping domain errors onto status codes and the
/// `{error, field, message}` payload.
#[derive(Debug)]
pub enum HttpError {
  /// Malformed or rejected input (400)
  Validation { field: String, message: String },

  /// Credential mismatch or unknown account (401)
  InvalidCredential,

  /// Missing, wrong or expired session (401)
  Unauthorized,

  /// Username or email already taken (409)
  Duplicate { field: String },

  /// Anything the client cannot fix (500)
  Internal(String),
}

impl HttpError {
  fn cause(&self) -> &'static str {
    match self {
      HttpError::Validation { .. } => "invalid_request",
      HttpError::InvalidCredential => "invalid_credential",
      HttpError::Unauthorized => "unauthorized",
      HttpError::Duplicate { .. } => "duplicate",
      HttpError::Internal(_) => "internal_error",
    }
  }

  fn payload(&self) -> (String, String) {
    match self {
      HttpError::Validation { field, message } => (field.clone(), message.clone()),
      HttpError::InvalidCredential => ("credential".to_string(), "credential mismatch".to_string()),
      HttpError::Unauthorized => (
        "session".to_string(),
        "invalid or expired session".to_string(),
      ),
      HttpError::Duplicate { field } => (field.clone(), format!("{} already exists", field)),
      HttpError::Internal(_) => ("server".to_string(), "internal server error".to_string()),
    }
  }
}

impl fmt::Display for HttpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      HttpError::Validation { field, message } => {
        write!(f, "Validation error on {}: {}", field, message)
      }
      HttpError::InvalidCredential => write!(f, "Invalid credential"),
      HttpError::Unauthorized => write!(f, "Unauthorized"),
      HttpError::Duplicate { field } => write!(f, "Duplicate {}", field),
      HttpError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for HttpError {
  fn status_code(&self) -> StatusCode {
    match self {
      HttpError::Validation { .. } => StatusCode::BAD_REQUEST,
      HttpError::InvalidCredential => StatusCode::UNAUTHORIZED,
      HttpError::Unauthorized => StatusCode::UNAUTHORIZED,
      HttpError::Duplicate { .. } => StatusCode::CONFLICT,
      HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    if let HttpError::Internal(msg) = self {
      // detail stays in the logs, never in the response
      tracing::error!("Internal error: {}", msg);
    }

    let (field, message) = self.payload();
    let api_error =
      ApiError::new(self.cause(), field, message).unwrap_or_else(|_| ApiError::internal());
    let body = ErrorResponse {
      error: api_error.cause().to_string(),
      field: api_error.field().to_string(),
      message: api_error.message().to_string(),
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(body)
  }
}

impl From<AuthError> for HttpError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => HttpError::InvalidCredential,
      AuthError::DuplicateUsername => HttpError::Duplicate {
        field: "username".to_string(),
      },
      AuthError::DuplicateEmail => HttpError::Duplicate {
        field: "email".to_string(),
      },
      AuthError::SessionNotFound | AuthError::SessionExpired => HttpError::Unauthorized,
      AuthError::Validation(err) => HttpError::Validation {
        field: err.field().to_string(),
        message: format!("{} is invalid", err.field()),
      },
      AuthError::TokenGeneration(msg) | AuthError::Hashing(msg) => HttpError::Internal(msg),
      AuthError::Repository(err) => HttpError::Internal(err.to_string()),
    }
  }
}

impl From<HueError> for HttpError {
  fn from(error: HueError) -> Self {
    match error {
      HueError::InvalidResult | HueError::InvalidRecord | HueError::InvalidRange => {
        HttpError::Validation {
          field: error.field().to_string(),
          message: format!("{} is invalid", error.field()),
        }
      }
      HueError::GenerationFailed(msg) => HttpError::Internal(msg),
      HueError::Repository(err) => HttpError::Internal(err.to_string()),
      HueError::Auth(err) => HttpError::from(err),
    }
  }
}

/// Convert validation errors from the validator crate
impl From<validator::ValidationErrors> for HttpError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let (field, message) = errors
      .field_errors()
      .iter()
      .next()
      .map(|(field, errs)| {
        let message = errs
          .first()
          .and_then(|e| e.message.as_ref())
          .map(|m| m.to_string())
          .unwrap_or_else(|| format!("{} is invalid", field));
        (field.to_string(), message)
      })
      .unwrap_or_else(|| ("body".to_string(), "request body is invalid".to_string()));

    HttpError::Validation { field, message }
  }
}
