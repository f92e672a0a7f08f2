use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::AdminCredential;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::Name;

/// Command for authenticating an existing account
#[derive(Debug, Clone)]
pub struct LoginAdminCommand {
  /// Username
  pub name: String,
  /// Password (plain text)
  pub password: String,
}

/// Response after a successful login
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
  /// Unique identifier of the user
  pub user_id: Uuid,
  /// Plaintext session token, shown to the client exactly once
  pub token: String,
  /// Role of the authenticated account
  pub role: String,
}

/// Use case for the admin login flow
pub struct LoginAdminUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginAdminUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Validates the credential shape and authenticates.
  ///
  /// # Errors
  /// A malformed name or blank password surfaces as
  /// `AuthError::InvalidCredentials`, the same error an unknown name or a
  /// wrong password produces.
  pub async fn execute(&self, command: LoginAdminCommand) -> Result<LoginAdminResponse, AuthError> {
    let name = Name::new(command.name).map_err(|_| AuthError::InvalidCredentials)?;
    let credential =
      AdminCredential::new(name, command.password).map_err(|_| AuthError::InvalidCredentials)?;

    let (session, role) = self.auth_service.login(credential).await?;

    Ok(LoginAdminResponse {
      user_id: session.user_id(),
      token: session.token().as_str().to_string(),
      role: role.as_str().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::application::auth::sign_in_user::{SignInUserCommand, SignInUserUseCase};
  use crate::domain::auth::services::AuthServiceConfig;
  use crate::domain::auth::testing::{
    FixedClock, InMemorySessionRepository, InMemoryUserRepository, PlainPasswordHasher,
    PlainTokenHasher, RandomTokenGenerator,
  };
  use chrono::{TimeZone, Utc};

  fn auth_service() -> Arc<AuthService> {
    Arc::new(AuthService::new(
      Arc::new(InMemoryUserRepository::default()),
      Arc::new(InMemorySessionRepository::default()),
      Arc::new(PlainPasswordHasher),
      Arc::new(PlainTokenHasher),
      Arc::new(RandomTokenGenerator),
      Arc::new(FixedClock::at(
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
      )),
      AuthServiceConfig::default(),
    ))
  }

  #[tokio::test]
  async fn login_after_sign_in_issues_a_fresh_token() {
    let service = auth_service();

    let signed_in = SignInUserUseCase::new(service.clone())
      .execute(SignInUserCommand {
        name: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret".to_string(),
      })
      .await
      .unwrap();

    let logged_in = LoginAdminUseCase::new(service)
      .execute(LoginAdminCommand {
        name: "alice".to_string(),
        password: "secret".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(logged_in.user_id, signed_in.user_id);
    assert_ne!(logged_in.token, signed_in.token);
  }

  #[tokio::test]
  async fn blank_name_reads_as_invalid_credentials() {
    let err = LoginAdminUseCase::new(auth_service())
      .execute(LoginAdminCommand {
        name: "  ".to_string(),
        password: "secret".to_string(),
      })
      .await
      .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
  }
}
