use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::auth::value_objects::Name;
use crate::domain::hue::entities::{HueRecord, HueResultSubmission};
use crate::domain::hue::errors::HueError;
use crate::domain::hue::services::HueService;

/// Command for storing a finished quiz and generating its result
#[derive(Debug, Clone)]
pub struct SaveResultCommand {
  /// Display name of the submitting user
  pub user_name: String,
  /// Name attached to the stored record
  pub record_name: String,
  /// The quiz answers, word to color name
  pub choices: BTreeMap<String, String>,
}

/// Response carrying the generated color and message
#[derive(Debug, Clone)]
pub struct SaveResultResponse {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub message: String,
}

/// Use case for the save-result flow
pub struct SaveResultUseCase {
  hue_service: Arc<HueService>,
}

impl SaveResultUseCase {
  pub fn new(hue_service: Arc<HueService>) -> Self {
    Self { hue_service }
  }

  /// Validates the submission, persists it and returns the generated result.
  pub async fn execute(&self, command: SaveResultCommand) -> Result<SaveResultResponse, HueError> {
    let user = Name::new(command.user_name).map_err(|_| HueError::InvalidRecord)?;
    let record = HueRecord::from_raw(command.record_name, command.choices)?;

    let result = self
      .hue_service
      .save_result(HueResultSubmission::new(user, record))
      .await?;

    Ok(SaveResultResponse {
      r: result.hue().r(),
      g: result.hue().g(),
      b: result.hue().b(),
      message: result.message().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::services::{AuthService, AuthServiceConfig};
  use crate::domain::auth::testing::{
    FixedClock, InMemorySessionRepository, InMemoryUserRepository, PlainPasswordHasher,
    PlainTokenHasher, RandomTokenGenerator,
  };
  use crate::domain::hue::testing::{CannedResultGenerator, InMemoryHueRecordRepository};
  use chrono::{TimeZone, Utc};

  fn use_case() -> SaveResultUseCase {
    let auth = Arc::new(AuthService::new(
      Arc::new(InMemoryUserRepository::default()),
      Arc::new(InMemorySessionRepository::default()),
      Arc::new(PlainPasswordHasher),
      Arc::new(PlainTokenHasher),
      Arc::new(RandomTokenGenerator),
      Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
      )),
      AuthServiceConfig::default(),
    ));
    SaveResultUseCase::new(Arc::new(HueService::new(
      Arc::new(InMemoryHueRecordRepository::default()),
      Arc::new(CannedResultGenerator::default()),
      auth,
    )))
  }

  fn choices() -> BTreeMap<String, String> {
    BTreeMap::from([("calm".to_string(), "blue".to_string())])
  }

  #[tokio::test]
  async fn returns_the_generated_color() {
    let response = use_case()
      .execute(SaveResultCommand {
        user_name: "alice".to_string(),
        record_name: "alice".to_string(),
        choices: choices(),
      })
      .await
      .unwrap();

    assert_eq!((response.r, response.g, response.b), (12, 34, 56));
    assert_eq!(response.message, "a thoughtful teal");
  }

  #[tokio::test]
  async fn blank_user_name_is_an_invalid_record() {
    let err = use_case()
      .execute(SaveResultCommand {
        user_name: "  ".to_string(),
        record_name: "alice".to_string(),
        choices: choices(),
      })
      .await
      .unwrap_err();

    assert!(matches!(err, HueError::InvalidRecord));
  }
}
