use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

/// Request for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
  /// Desired username
  #[validate(length(min = 1, max = 255, message = "Name is required"))]
  pub name: String,

  /// User's email address
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  /// User's password
  #[validate(length(min = 1, max = 128, message = "Password is required"))]
  pub password: String,
}

/// Request for admin login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  /// Username
  #[validate(length(min = 1, max = 255, message = "Name is required"))]
  pub name: String,

  /// Password
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Session payload returned by both credential endpoints
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
  /// User the session was issued to
  pub user_id: Uuid,

  /// Plaintext session token, surfaced exactly once
  pub token: String,

  /// Role of the account
  pub role: String,
}

/// A quiz record on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HueRecordPayload {
  pub name: String,
  /// Word-to-color-name choices
  pub choice: BTreeMap<String, String>,
}

/// Request for storing a finished quiz
#[derive(Debug, Clone, Deserialize)]
pub struct SaveResultRequest {
  pub user_name: String,
  pub record: HueRecordPayload,
}

/// The generated color
#[derive(Debug, Clone, Serialize)]
pub struct HueRgbPayload {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

/// Response carrying the generated result
#[derive(Debug, Clone, Serialize)]
pub struct SaveResultResponse {
  pub hue: HueRgbPayload,
  pub message: String,
}

/// Request for fetching stored records
#[derive(Debug, Clone, Deserialize)]
pub struct GetDataRequest {
  pub user_id: Uuid,
  pub token: String,
  /// Inclusive `[from, to]` index pair over the newest-first record list
  #[serde(rename = "data-range")]
  pub data_range: Vec<i64>,
}

/// Response carrying a page of stored records
#[derive(Debug, Clone, Serialize)]
pub struct GetDataResponse {
  pub records: Vec<HueRecordPayload>,
}

/// Error payload returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  pub error: String,
  pub field: String,
  pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub status: String,
}
