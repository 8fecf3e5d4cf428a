//! LLM client abstraction and the Gemini implementation.
//!
//! The agent loop talks to the model exclusively through the [`LLMClient`]
//! trait so tests can substitute a scripted client. The one production
//! implementation is [`gemini::GeminiClient`], which speaks Gemini's
//! OpenAI-compatible chat completions API.

/// Core LLM client trait and conversation types.
pub mod client;
/// Google Gemini chat completions client.
pub mod gemini;

pub use client::{ChatMessage, LLMClient, LLMResponse, MessageRole};
pub use gemini::GeminiClient;
