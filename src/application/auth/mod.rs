//! Authentication use cases
//!
//! Orchestrate the auth domain service into the two credential workflows
//! the API exposes.

pub mod login_admin;
pub mod sign_in_user;

pub use login_admin::{LoginAdminCommand, LoginAdminResponse, LoginAdminUseCase};
pub use sign_in_user::{SignInUserCommand, SignInUserResponse, SignInUserUseCase};
