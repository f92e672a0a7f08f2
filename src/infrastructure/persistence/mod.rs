//! Persistence infrastructure

pub mod postgres;
