use std::collections::BTreeMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::value_objects::SessionToken;
use crate::domain::hue::errors::HueError;
use crate::domain::hue::services::HueService;
use crate::domain::hue::value_objects::RecordRange;

/// Command for fetching a page of stored quiz records
#[derive(Debug, Clone)]
pub struct GetRecordsCommand {
  /// User the session was issued to
  pub user_id: Uuid,
  /// Plaintext session token as presented by the client
  pub token: String,
  /// Inclusive index of the first record, counted from the newest
  pub from: i64,
  /// Inclusive index of the last record
  pub to: i64,
}

/// A stored record as returned to the client
#[derive(Debug, Clone)]
pub struct RecordView {
  pub name: String,
  pub choices: BTreeMap<String, String>,
}

/// Response carrying the requested page, newest first
#[derive(Debug, Clone)]
pub struct GetRecordsResponse {
  pub records: Vec<RecordView>,
}

/// Use case for the get-data flow
pub struct GetRecordsUseCase {
  hue_service: Arc<HueService>,
}

impl GetRecordsUseCase {
  pub fn new(hue_service: Arc<HueService>) -> Self {
    Self { hue_service }
  }

  /// Parses the token and range, verifies the session and fetches the page.
  ///
  /// # Errors
  /// A token that fails to parse never reaches storage; it surfaces as
  /// `AuthError::SessionNotFound` wrapped in `HueError::Auth`, the same
  /// error a wrong token produces.
  pub async fn execute(&self, command: GetRecordsCommand) -> Result<GetRecordsResponse, HueError> {
    let token =
      SessionToken::parse(command.token).map_err(|_| HueError::Auth(AuthError::SessionNotFound))?;
    let range = RecordRange::new(command.from, command.to)?;

    let records = self
      .hue_service
      .get_records(command.user_id, &token, &range)
      .await?;

    Ok(GetRecordsResponse {
      records: records
        .into_iter()
        .map(|record| RecordView {
          name: record.name().as_str().to_string(),
          choices: record.choices().to_map(),
        })
        .collect(),
    })
  }
}
