//! Tool infrastructure for agent capabilities.
//!
//! A [`registry::Tool`] is an invocable capability the agent can request
//! by name; the [`registry::ToolRegistry`] maps names to implementations.
//! The single built-in tool is [`search::TavilySearchTool`], a web search
//! backed by the Tavily Search API.

/// Tool registration and lookup.
pub mod registry;
/// Web search tool using the Tavily Search API.
pub mod search;

pub use registry::{Tool, ToolRegistry};
pub use search::TavilySearchTool;
