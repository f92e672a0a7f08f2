use std::collections::BTreeMap;

use super::errors::HueError;

// ============================================================================
// HueRgb Value Object
// ============================================================================

/// An RGB color as returned to the result screen. Channels are validated
/// into `0..=255` at the boundary where raw integers come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueRgb {
  r: u8,
  g: u8,
  b: u8,
}

impl HueRgb {
  pub fn new(r: i32, g: i32, b: i32) -> Result<Self, HueError> {
    let channel = |v: i32| u8::try_from(v).map_err(|_| HueError::InvalidResult);

    Ok(Self {
      r: channel(r)?,
      g: channel(g)?,
      b: channel(b)?,
    })
  }

  pub fn r(&self) -> u8 {
    self.r
  }

  pub fn g(&self) -> u8 {
    self.g
  }

  pub fn b(&self) -> u8 {
    self.b
  }
}

// ============================================================================
// HueResult Value Object
// ============================================================================

/// Color and message shown on the result screen. Gates the output of the
/// external generation call before it reaches a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueResult {
  hue: HueRgb,
  message: String,
}

impl HueResult {
  pub fn new(hue: HueRgb, message: impl Into<String>) -> Result<Self, HueError> {
    let message = message.into().trim().to_string();

    if message.is_empty() {
      return Err(HueError::InvalidResult);
    }

    Ok(Self { hue, message })
  }

  /// Assembles a result from raw channel values and a message.
  pub fn from_raw(r: i32, g: i32, b: i32, message: impl Into<String>) -> Result<Self, HueError> {
    Self::new(HueRgb::new(r, g, b)?, message)
  }

  pub fn hue(&self) -> HueRgb {
    self.hue
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

// ============================================================================
// HueChoices Value Object
// ============================================================================

/// The quiz answers: a word-to-color-name mapping, at least one entry,
/// no blank words or colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HueChoices(BTreeMap<String, String>);

impl HueChoices {
  pub fn from_raw(choices: impl IntoIterator<Item = (String, String)>) -> Result<Self, HueError> {
    let mut validated = BTreeMap::new();

    for (word, color) in choices {
      let word = word.trim().to_string();
      let color = color.trim().to_string();
      if word.is_empty() || color.is_empty() {
        return Err(HueError::InvalidRecord);
      }
      validated.insert(word, color);
    }

    if validated.is_empty() {
      return Err(HueError::InvalidRecord);
    }

    Ok(Self(validated))
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn to_map(&self) -> BTreeMap<String, String> {
    self.0.clone()
  }
}

// ============================================================================
// RecordRange Value Object
// ============================================================================

/// Inclusive index pair bounding a page of historical records, counted from
/// the newest record. `from <= to`, both non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRange {
  from: i64,
  to: i64,
}

impl RecordRange {
  pub fn new(from: i64, to: i64) -> Result<Self, HueError> {
    if from < 0 || to < 0 || from > to {
      return Err(HueError::InvalidRange);
    }

    // the inclusive span must stay representable as an i64 LIMIT
    if (to - from).checked_add(1).is_none() {
      return Err(HueError::InvalidRange);
    }

    Ok(Self { from, to })
  }

  pub fn from(&self) -> i64 {
    self.from
  }

  pub fn to(&self) -> i64 {
    self.to
  }

  /// Number of records the range spans.
  pub fn limit(&self) -> i64 {
    self.to - self.from + 1
  }

  /// Offset of the first record in the range.
  pub fn offset(&self) -> i64 {
    self.from
  }
}
