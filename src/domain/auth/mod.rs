pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types
pub use entities::{AdminCredential, LoginSession, SessionData, SignInCredential, User};
pub use errors::{AuthError, RepositoryError, ValidationError};
pub use services::{AuthService, AuthServiceConfig};
pub use value_objects::{
  Email, HashedPassword, HashedSessionToken, Name, RawPassword, SessionToken, UserRole,
};
