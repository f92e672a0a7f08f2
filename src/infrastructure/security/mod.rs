//! Security infrastructure: hashing and token generation

pub mod argon2_hasher;
pub mod token_generator;

pub use argon2_hasher::Argon2Hasher;
pub use token_generator::SecureTokenGenerator;
