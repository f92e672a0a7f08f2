//! Application layer
//!
//! Use cases translate raw input into domain values, drive the domain
//! services and shape plain responses for the HTTP adapters.

pub mod auth;
pub mod hue;
