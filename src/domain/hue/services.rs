use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

use super::entities::{HueRecord, HueResultSubmission};
use super::errors::HueError;
use super::ports::{HueRecordRepository, ResultGenerator};
use super::value_objects::{HueResult, RecordRange};

/// Quiz-result service: stores submissions and serves bounded history reads.
pub struct HueService {
  record_repo: Arc<dyn HueRecordRepository>,
  generator: Arc<dyn ResultGenerator>,
  auth_service: Arc<AuthService>,
}

impl HueService {
  pub fn new(
    record_repo: Arc<dyn HueRecordRepository>,
    generator: Arc<dyn ResultGenerator>,
    auth_service: Arc<AuthService>,
  ) -> Self {
    Self {
      record_repo,
      generator,
      auth_service,
    }
  }

  /// Persists the submitted record, then asks the generator for the color
  /// and message. The generator's output has already passed through the
  /// domain constructors, so a malformed upstream response cannot reach
  /// the caller.
  pub async fn save_result(
    &self,
    submission: HueResultSubmission,
  ) -> Result<HueResult, HueError> {
    self.record_repo.save(submission.record()).await?;

    let result = self.generator.generate(submission.record().choices()).await?;

    tracing::debug!(user = %submission.user(), "hue result generated");
    Ok(result)
  }

  /// Returns the requested page of records after verifying the session.
  pub async fn get_records(
    &self,
    user_id: Uuid,
    token: &SessionToken,
    range: &RecordRange,
  ) -> Result<Vec<HueRecord>, HueError> {
    self.auth_service.verify_session(user_id, token).await?;

    self.record_repo.list(range).await
  }
}
