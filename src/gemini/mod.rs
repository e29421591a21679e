//! Gemini text-generation integration.

pub mod client;
pub(crate) mod types;

pub use client::{GeminiClient, GenerationClient};
