//! Environment-based configuration.
//!
//! All settings come from environment variables (a `.env` file is honored
//! in development). Credentials are required and validated at startup so a
//! misconfigured process fails before it starts serving requests.

use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    pub agent: AgentConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub base_url: String,
    pub max_results: usize,
}

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub max_iterations: usize,
}

fn required(name: &str) -> Result<String> {
    env::var(name).map_err(|_| AppError::Config(format!("{} must be set", name)))
}

fn parsed<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| AppError::Config(format!("{} is not a valid value", name)))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parsed("PORT", "3000")?,
            },
            llm: LlmConfig {
                api_key: required("GOOGLE_API_KEY")?,
                base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
                }),
                model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
                temperature: parsed("LLM_TEMPERATURE", "0.7")?,
                max_tokens: parsed("LLM_MAX_TOKENS", "8192")?,
            },
            search: SearchConfig {
                api_key: required("TAVILY_API_KEY")?,
                base_url: env::var("TAVILY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.tavily.com".to_string()),
                max_results: parsed("SEARCH_MAX_RESULTS", "1")?,
            },
            agent: AgentConfig {
                max_iterations: parsed("AGENT_MAX_ITERATIONS", "10")?,
            },
        })
    }
}
