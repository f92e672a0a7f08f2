pub mod cors;
pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  ErrorResponse, GetDataRequest, GetDataResponse, HueRecordPayload, LoginRequest,
  SaveResultRequest, SaveResultResponse, SessionResponse, SignInRequest,
};
pub use cors::cors_middleware;
pub use errors::HttpError;
pub use routes::{configure_auth_routes, configure_hue_routes, health_handler};
