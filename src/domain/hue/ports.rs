use async_trait::async_trait;

use super::entities::HueRecord;
use super::errors::HueError;
use super::value_objects::{HueChoices, HueResult, RecordRange};

/// Repository trait for persisted quiz records
#[async_trait]
pub trait HueRecordRepository: Send + Sync {
  /// Appends a record
  async fn save(&self, record: &HueRecord) -> Result<(), HueError>;

  /// Fetches the page of records bounded by `range`, newest first
  async fn list(&self, range: &RecordRange) -> Result<Vec<HueRecord>, HueError>;
}

/// Port for the external text-generation call that turns quiz answers into
/// a color and a message. Implementations own their own timeout policy.
#[async_trait]
pub trait ResultGenerator: Send + Sync {
  async fn generate(&self, choices: &HueChoices) -> Result<HueResult, HueError>;
}
