use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::{PasswordHasher, TokenHasher};
use crate::domain::auth::value_objects::{
  HashedPassword, HashedSessionToken, RawPassword, SessionToken,
};

/// Argon2id hasher used for both passwords and session tokens
///
/// Parameters:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
///
/// Every hash gets a fresh random salt, so hashing the same input twice
/// yields different strings. That property is what forces the session
/// lookup to scan and verify rather than match on equality.
pub struct Argon2Hasher {
  argon2: Argon2<'static>,
}

impl Argon2Hasher {
  pub fn new() -> Result<Self, AuthError> {
    let memory_cost = 19456;
    let time_cost = 2;
    let parallelism = 1;
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len)
      .map_err(|e| AuthError::Hashing(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  fn hash_bytes(&self, input: &[u8]) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(input, &salt)
      .map_err(|e| AuthError::Hashing(format!("Failed to hash input: {}", e)))?;

    Ok(hash.to_string())
  }

  fn verify_bytes(&self, input: &[u8], hash: &str) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hash)
      .map_err(|e| AuthError::Hashing(format!("Invalid hash format: {}", e)))?;

    match self.argon2.verify_password(input, &parsed_hash) {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AuthError::Hashing(format!("Verification failed: {}", e))),
    }
  }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
  async fn hash(&self, password: &RawPassword) -> Result<HashedPassword, AuthError> {
    let hash = self.hash_bytes(password.as_str().as_bytes())?;

    HashedPassword::new(hash).map_err(AuthError::from)
  }

  async fn verify(
    &self,
    password: &RawPassword,
    hashed_password: &HashedPassword,
  ) -> Result<bool, AuthError> {
    self.verify_bytes(password.as_str().as_bytes(), hashed_password.as_str())
  }
}

#[async_trait]
impl TokenHasher for Argon2Hasher {
  async fn hash(&self, token: &SessionToken) -> Result<HashedSessionToken, AuthError> {
    let hash = self.hash_bytes(token.as_str().as_bytes())?;

    HashedSessionToken::new(hash).map_err(AuthError::from)
  }

  async fn verify(
    &self,
    token: &SessionToken,
    hashed_token: &HashedSessionToken,
  ) -> Result<bool, AuthError> {
    self.verify_bytes(token.as_str().as_bytes(), hashed_token.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn password_hash_verifies_and_rejects() {
    let hasher = Argon2Hasher::new().unwrap();
    let password = RawPassword::new("test_password_123").unwrap();
    let wrong = RawPassword::new("wrong_password").unwrap();

    let hash = PasswordHasher::hash(&hasher, &password).await.unwrap();
    assert!(hash.as_str().starts_with("$argon2id$"));

    assert!(
      PasswordHasher::verify(&hasher, &password, &hash)
        .await
        .unwrap()
    );
    assert!(
      !PasswordHasher::verify(&hasher, &wrong, &hash)
        .await
        .unwrap()
    );
  }

  #[tokio::test]
  async fn same_token_hashes_differently_but_both_verify() {
    let hasher = Argon2Hasher::new().unwrap();
    let token = SessionToken::from_bytes([7u8; SessionToken::TOKEN_BYTES]);

    let hash1 = TokenHasher::hash(&hasher, &token).await.unwrap();
    let hash2 = TokenHasher::hash(&hasher, &token).await.unwrap();

    // fresh salt per hash
    assert_ne!(hash1.as_str(), hash2.as_str());

    assert!(TokenHasher::verify(&hasher, &token, &hash1).await.unwrap());
    assert!(TokenHasher::verify(&hasher, &token, &hash2).await.unwrap());
  }

  #[tokio::test]
  async fn foreign_token_does_not_verify() {
    let hasher = Argon2Hasher::new().unwrap();
    let token = SessionToken::from_bytes([7u8; SessionToken::TOKEN_BYTES]);
    let other = SessionToken::from_bytes([8u8; SessionToken::TOKEN_BYTES]);

    let hash = TokenHasher::hash(&hasher, &token).await.unwrap();

    assert!(!TokenHasher::verify(&hasher, &other, &hash).await.unwrap());
  }

  #[tokio::test]
  async fn garbage_stored_hash_is_an_error_not_a_mismatch() {
    let hasher = Argon2Hasher::new().unwrap();
    let password = RawPassword::new("whatever").unwrap();
    let garbage = HashedPassword::new("not-an-argon2-hash").unwrap();

    let result = PasswordHasher::verify(&hasher, &password, &garbage).await;
    assert!(matches!(result, Err(AuthError::Hashing(_))));
  }
}
