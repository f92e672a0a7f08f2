//! In-memory fakes for the hue ports, shared by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::entities::HueRecord;
use super::errors::HueError;
use super::ports::{HueRecordRepository, ResultGenerator};
use super::value_objects::{HueChoices, HueResult, RecordRange};

/// Vec-backed record store, newest last.
#[derive(Default)]
pub struct InMemoryHueRecordRepository {
  records: Mutex<Vec<HueRecord>>,
}

#[async_trait]
impl HueRecordRepository for InMemoryHueRecordRepository {
  async fn save(&self, record: &HueRecord) -> Result<(), HueError> {
    self.records.lock().unwrap().push(record.clone());
    Ok(())
  }

  async fn list(&self, range: &RecordRange) -> Result<Vec<HueRecord>, HueError> {
    let records = self.records.lock().unwrap();
    Ok(
      records
        .iter()
        .rev()
        .skip(range.offset() as usize)
        .take(range.limit() as usize)
        .cloned()
        .collect(),
    )
  }
}

/// Generator that always returns the same result, ignoring the choices.
#[derive(Default)]
pub struct CannedResultGenerator;

#[async_trait]
impl ResultGenerator for CannedResultGenerator {
  async fn generate(&self, _choices: &HueChoices) -> Result<HueResult, HueError> {
    HueResult::from_raw(12, 34, 56, "a thoughtful teal")
  }
}
