use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::application::auth::{LoginAdminUseCase, SignInUserUseCase};
use crate::application::hue::{GetRecordsUseCase, SaveResultUseCase};

use super::dtos::HealthResponse;
use super::handlers::auth::{login_handler, sign_in_handler};
use super::handlers::hue::{get_data_handler, save_result_handler};

/// Configure the credential routes
///
/// - POST /api/sign-in - Register a new account
/// - POST /api/login - Authenticate an existing account
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  sign_in_use_case: Arc<SignInUserUseCase>,
  login_use_case: Arc<LoginAdminUseCase>,
) {
  cfg
    .app_data(web::Data::new(sign_in_use_case))
    .app_data(web::Data::new(login_use_case))
    .route("/api/sign-in", web::post().to(sign_in_handler))
    .route("/api/login", web::post().to(login_handler));
}

/// Configure the quiz-result routes
///
/// - POST /api/hue-are-you/save-result - Store a quiz and generate its result
/// - POST /api/hue-are-you/get-data - Fetch a page of stored records
pub fn configure_hue_routes(
  cfg: &mut web::ServiceConfig,
  save_result_use_case: Arc<SaveResultUseCase>,
  get_records_use_case: Arc<GetRecordsUseCase>,
) {
  cfg
    .app_data(web::Data::new(save_result_use_case))
    .app_data(web::Data::new(get_records_use_case))
    .route(
      "/api/hue-are-you/save-result",
      web::post().to(save_result_handler),
    )
    .route("/api/hue-are-you/get-data", web::post().to(get_data_handler));
}

/// Health check endpoint
pub async fn health_handler() -> HttpResponse {
  HttpResponse::Ok().json(HealthResponse {
    status: "ok".to_string(),
  })
}
