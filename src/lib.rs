//! # Scout
//!
//! An agentic web-search HTTP service: one endpoint, one tool, an LLM
//! agent loop in between. A query posted to `/process_query` is handed to
//! a Gemini-backed agent that decides, step by step, whether to call the
//! web-search tool or produce a final answer; the response carries the
//! answer, the first search-result URL, and a base64 dump of the full run.
//!
//! ## Overview
//!
//! Scout can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `scout-server` binary
//! 2. **As a library** - Drive [`agent::AgentExecutor`] from your own code
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use scout::{AgentExecutor, ExecutorConfig, GeminiClient, TavilySearchTool, ToolRegistry};
//! use std::sync::Arc;
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(TavilySearchTool::new(search_config)?))?;
//!
//! let client = Arc::new(GeminiClient::new(llm_config)?);
//! let executor = AgentExecutor::new(client, Arc::new(registry), ExecutorConfig::default());
//!
//! let run = executor.run("What is the capital of France?").await?;
//! println!("{}", run.output);
//! ```
//!
//! ## Modules
//!
//! - [`agent`] - The iterate-until-finished tool-calling loop
//! - [`api`] - HTTP handlers and routes
//! - [`config`] - Environment-based configuration
//! - [`llm`] - LLM client trait and the Gemini implementation
//! - [`tools`] - Tool trait, registry, and the Tavily search tool
//! - [`types`] - Common types and error handling

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// The tool-calling agent loop.
pub mod agent;
/// HTTP API handlers and routes.
pub mod api;
/// Environment-based configuration.
pub mod config;
/// LLM client abstractions.
pub mod llm;
/// Tool definitions and registry.
pub mod tools;
/// Core types (requests, responses, errors).
pub mod types;

// Re-export commonly used types
pub use agent::{AgentExecutor, ExecutorConfig, StepOutcome};
pub use config::Config;
pub use llm::{GeminiClient, LLMClient, LLMResponse};
pub use tools::{TavilySearchTool, Tool, ToolRegistry};
pub use types::{AppError, Result};

use std::sync::Arc;

/// Application state shared across handlers.
///
/// Built once at startup and never mutated afterwards; handlers receive
/// cheap clones of the `Arc`s inside.
#[derive(Clone)]
pub struct AppState {
    /// Immutable service configuration.
    pub config: Arc<Config>,
    /// The agent loop, sharing one LLM client and tool registry.
    pub executor: Arc<AgentExecutor>,
}
