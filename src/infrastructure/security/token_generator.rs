use async_trait::async_trait;
use rand::RngCore;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::TokenGenerator;
use crate::domain::auth::value_objects::SessionToken;

/// Token generator backed by the operating system CSPRNG
pub struct SecureTokenGenerator;

impl SecureTokenGenerator {
  pub fn new() -> Self {
    Self
  }
}

impl Default for SecureTokenGenerator {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl TokenGenerator for SecureTokenGenerator {
  /// Draws 32 random bytes from OsRng and wraps them as a session token.
  ///
  /// `OsRng::try_fill_bytes` failure means the OS entropy source is broken;
  /// the request fails rather than retrying into a weak token.
  async fn generate(&self) -> Result<SessionToken, AuthError> {
    let mut token_bytes = [0u8; SessionToken::TOKEN_BYTES];

    rand::rngs::OsRng
      .try_fill_bytes(&mut token_bytes)
      .map_err(|e| AuthError::TokenGeneration(format!("OS entropy source failed: {}", e)))?;

    Ok(SessionToken::from_bytes(token_bytes))
  }
}
