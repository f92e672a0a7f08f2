use crate::domain::auth::value_objects::Name;

use super::errors::HueError;
use super::value_objects::HueChoices;

/// A completed quiz: who answered and what they picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueRecord {
  name: Name,
  choices: HueChoices,
}

impl HueRecord {
  pub fn new(name: Name, choices: HueChoices) -> Self {
    Self { name, choices }
  }

  /// Builds a record from raw wire values.
  pub fn from_raw(
    name: impl Into<String>,
    choices: impl IntoIterator<Item = (String, String)>,
  ) -> Result<Self, HueError> {
    let name = Name::new(name).map_err(|_| HueError::InvalidRecord)?;
    let choices = HueChoices::from_raw(choices)?;

    Ok(Self { name, choices })
  }

  pub fn name(&self) -> &Name {
    &self.name
  }

  pub fn choices(&self) -> &HueChoices {
    &self.choices
  }
}

/// A save-result request: the submitting user plus the record to store.
#[derive(Debug, Clone)]
pub struct HueResultSubmission {
  user: Name,
  record: HueRecord,
}

impl HueResultSubmission {
  pub fn new(user: Name, record: HueRecord) -> Self {
    Self { user, record }
  }

  pub fn user(&self) -> &Name {
    &self.user
  }

  pub fn record(&self) -> &HueRecord {
    &self.record
  }
}
