use serde::{Deserialize, Serialize};

// ============= API Request/Response Types =============

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Base64-encoded JSON dump of the full agent run.
    pub raw_data: String,
    /// The agent's final answer text.
    pub desired_output: String,
    /// URL from the first search observation, if a search was performed.
    pub url: Option<String>,
}

// ============= Tool Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

// ============= Agent Types =============

/// One recorded loop iteration: the tool call the model requested and the
/// observation its execution produced. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntermediateStep {
    pub call: ToolCall,
    pub observation: serde_json::Value,
}

/// The agent's final answer, ending the loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentFinish {
    pub output: String,
}

/// Terminal state of one query: the final answer plus every intermediate
/// step in the order the tools were actually invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRun {
    pub output: String,
    pub intermediate_steps: Vec<IntermediateStep>,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Tool error: {0}")]
    Tool(String),

    #[error("Unexpected result shape: {0}")]
    ShapeMismatch(String),

    #[error("Agent loop exhausted: {0}")]
    Exhausted(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ToolNotFound(msg) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                format!("Tool not found: {}", msg),
            ),
            AppError::Llm(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::Tool(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::ShapeMismatch(msg) => (axum::http::StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Exhausted(msg) => (axum::http::StatusCode::GATEWAY_TIMEOUT, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
