use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::errors::ValidationError;

// ============================================================================
// Name Value Object
// ============================================================================

/// A display name (username), trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name(String);

impl Name {
  /// Creates a new Name after trimming; empty input is rejected.
  pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
    let trimmed = name.into().trim().to_string();

    if trimmed.is_empty() {
      return Err(ValidationError::InvalidName);
    }

    Ok(Self(trimmed))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Name {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// Email Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
  /// Creates a new Email after validation.
  ///
  /// Input is trimmed and lowercased; re-validating the output is a no-op.
  pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
    let email = email.into().trim().to_lowercase();

    if !email.validate_email() {
      return Err(ValidationError::InvalidEmail);
    }

    Ok(Self(email))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// RawPassword Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(String);

impl RawPassword {
  /// Creates a new RawPassword; whitespace-only input is rejected.
  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let trimmed = password.into().trim().to_string();

    if trimmed.is_empty() {
      return Err(ValidationError::InvalidPassword);
    }

    Ok(Self(trimmed))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for RawPassword {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("RawPassword(***)")
  }
}

impl fmt::Display for RawPassword {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// HashedPassword Value Object
// ============================================================================

/// An already-hashed password, as produced by the hasher or loaded from
/// storage. The constructor only guards against blank values; the hash
/// format itself is owned by the hashing port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedPassword(String);

impl HashedPassword {
  pub fn new(hash: impl Into<String>) -> Result<Self, ValidationError> {
    let trimmed = hash.into().trim().to_string();

    if trimmed.is_empty() {
      return Err(ValidationError::InvalidPasswordHash);
    }

    Ok(Self(trimmed))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// ============================================================================
// UserRole Value Object
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
  User,
  Admin,
}

impl UserRole {
  /// Parses a role from its storage/wire form, case-insensitively.
  pub fn parse(value: &str) -> Result<Self, ValidationError> {
    match value.trim().to_lowercase().as_str() {
      "user" => Ok(Self::User),
      "admin" => Ok(Self::Admin),
      _ => Err(ValidationError::InvalidRole),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::User => "user",
      Self::Admin => "admin",
    }
  }
}

impl fmt::Display for UserRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ============================================================================
// SessionToken Value Object (Random Secure Token)
// ============================================================================

/// The plaintext session secret handed to the client: 32 random bytes in
/// base64url (no padding). Never persisted; only its salted hash is stored.
#[derive(Clone)]
pub struct SessionToken(String);

impl SessionToken {
  /// 32 bytes = 256 bits of entropy.
  pub const TOKEN_BYTES: usize = 32;

  /// Wraps freshly generated random bytes.
  pub fn from_bytes(bytes: [u8; Self::TOKEN_BYTES]) -> Self {
    Self(URL_SAFE_NO_PAD.encode(bytes))
  }

  /// Decodes an externally supplied token string.
  ///
  /// Rejects bad alphabets and wrong lengths here, before any database
  /// round-trip is attempted with the value.
  pub fn parse(token: impl Into<String>) -> Result<Self, ValidationError> {
    let token = token.into().trim().to_string();

    let bytes = URL_SAFE_NO_PAD
      .decode(&token)
      .map_err(|_| ValidationError::InvalidSessionToken)?;

    if bytes.len() != Self::TOKEN_BYTES {
      return Err(ValidationError::InvalidSessionToken);
    }

    Ok(Self(token))
  }

  /// Returns the encoded token (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// Implement Debug without exposing the token
impl fmt::Debug for SessionToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("SessionToken(***)")
  }
}

impl fmt::Display for SessionToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("***")
  }
}

// ============================================================================
// HashedSessionToken Value Object
// ============================================================================

/// The salted, one-way hash of a session token. This is the value that is
/// persisted. Loading from storage only trims and wraps; the stored value
/// is authoritative and is never re-hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedSessionToken(String);

impl HashedSessionToken {
  pub fn new(hash: impl Into<String>) -> Result<Self, ValidationError> {
    let trimmed = hash.into().trim().to_string();

    if trimmed.is_empty() {
      return Err(ValidationError::InvalidSessionToken);
    }

    Ok(Self(trimmed))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}
