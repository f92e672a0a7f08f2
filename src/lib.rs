//! Backend for the "Hue Are You" quiz.
//!
//! Layered in the usual clean-architecture shape: `domain` holds value
//! objects, entities and the service logic behind trait ports;
//! `application` wraps the services in Command/Response use cases;
//! `infrastructure` provides the Postgres, Argon2, entropy, clock, config
//! and OpenAI implementations; `adapters` is the thin actix-web glue.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
