use actix_web::{HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{LoginRequest, SessionResponse, SignInRequest},
  errors::HttpError,
};
use crate::application::auth::{
  LoginAdminCommand, LoginAdminUseCase, SignInUserCommand, SignInUserUseCase,
};

/// Handler for user registration
///
/// POST /api/sign-in
/// Body: SignInRequest (JSON)
/// Response: SessionResponse (JSON) with status 200
pub async fn sign_in_handler(
  request: web::Json<SignInRequest>,
  use_case: web::Data<Arc<SignInUserUseCase>>,
) -> Result<HttpResponse, HttpError> {
  request.validate()?;

  let command = SignInUserCommand {
    name: request.name.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(SessionResponse {
    user_id: response.user_id,
    token: response.token,
    role: response.role,
  }))
}

/// Handler for admin login
///
/// POST /api/login
/// Body: LoginRequest (JSON)
/// Response: SessionResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginAdminUseCase>>,
) -> Result<HttpResponse, HttpError> {
  request.validate()?;

  let command = LoginAdminCommand {
    name: request.name.clone(),
    password: request.password.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(SessionResponse {
    user_id: response.user_id,
    token: response.token,
    role: response.role,
  }))
}
