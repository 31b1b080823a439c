//! Gemini provider adapter

pub mod gateway;
pub mod types;

pub use gateway::{GeminiConfig, GeminiGateway};
