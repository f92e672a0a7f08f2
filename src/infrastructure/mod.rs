//! Infrastructure layer
//!
//! Concrete adapters behind the domain ports: Postgres persistence, Argon2
//! hashing, OS entropy, wall-clock time, configuration and the upstream
//! result generator.

pub mod clock;
pub mod config;
pub mod generation;
pub mod persistence;
pub mod security;
