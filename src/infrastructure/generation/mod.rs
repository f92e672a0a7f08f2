//! Upstream result generation

pub mod openai;

pub use openai::OpenAiResultGenerator;
