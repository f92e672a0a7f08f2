use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::SignInCredential;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::UserRole;

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct SignInUserCommand {
  /// Desired username
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

/// Response after a successful sign-in
#[derive(Debug, Clone)]
pub struct SignInUserResponse {
  /// Unique identifier of the newly created user
  pub user_id: Uuid,
  /// Plaintext session token, shown to the client exactly once
  pub token: String,
  /// Role assigned to the new account
  pub role: String,
}

/// Use case for registering a new user and issuing its first session
pub struct SignInUserUseCase {
  auth_service: Arc<AuthService>,
}

impl SignInUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Validates the raw credential and registers the account.
  ///
  /// # Errors
  /// Returns `AuthError::Validation` for malformed input and
  /// `AuthError::DuplicateUsername` / `AuthError::DuplicateEmail` when the
  /// identity is already taken.
  pub async fn execute(&self, command: SignInUserCommand) -> Result<SignInUserResponse, AuthError> {
    let credential = SignInCredential::new(command.name, command.email, command.password)?;

    let session = self.auth_service.sign_in(credential).await?;

    Ok(SignInUserResponse {
      user_id: session.user_id(),
      token: session.token().as_str().to_string(),
      role: UserRole::User.as_str().to_string(),
    })
  }
}
