//! Google Gemini chat completions client.
//!
//! Uses the Google AI Studio OpenAI-compatible chat completions API with
//! API key authentication. Tool definitions and tool calls follow the
//! OpenAI function-calling wire convention.

use crate::config::LlmConfig;
use crate::llm::client::{ChatMessage, LLMClient, LLMResponse};
use crate::types::{AppError, Result, ToolCall, ToolDefinition};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct GeminiClient {
    client: Client,
    config: LlmConfig,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    async fn generate_with_tools(
        &self,
        messages: &[ChatMessage],
        tools: &[ToolDefinition],
    ) -> Result<LLMResponse> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.iter().map(WireTool::from).collect())
            },
        };

        let url = self.api_url();
        tracing::debug!(%url, model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Llm(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!(%status, "Gemini request rejected");
            return Err(AppError::Llm(format!("Gemini HTTP {}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::Llm(format!("Gemini response parse error: {}", e)))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Llm("No choices in Gemini response".to_string()))?;

        let finish_reason = choice.finish_reason.unwrap_or_else(|| "unknown".to_string());
        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolCall {
                id: call.id,
                name: call.function.name,
                // Arguments arrive as a JSON-encoded string per the wire format
                arguments: serde_json::from_str(&call.function.arguments)
                    .unwrap_or(serde_json::json!({})),
            })
            .collect();

        Ok(LLMResponse {
            content: choice.message.content.unwrap_or_default(),
            tool_calls,
            finish_reason,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

// ============= Wire Types =============

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            // The API rejects null content everywhere except assistant
            // messages that carry tool calls.
            content: if msg.content.is_empty() && !msg.tool_calls.is_empty() {
                None
            } else {
                Some(msg.content.clone())
            },
            tool_calls: if msg.tool_calls.is_empty() {
                None
            } else {
                Some(msg.tool_calls.iter().map(WireToolCall::from).collect())
            },
            tool_call_id: msg.tool_call_id.clone(),
        }
    }
}

#[derive(Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunction,
}

#[derive(Serialize)]
struct WireFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

impl From<&ToolDefinition> for WireTool {
    fn from(def: &ToolDefinition) -> Self {
        Self {
            kind: "function",
            function: WireFunction {
                name: def.name.clone(),
                description: def.description.clone(),
                parameters: def.parameters.clone(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    function: WireFunctionCall,
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}

impl From<&ToolCall> for WireToolCall {
    fn from(call: &ToolCall) -> Self {
        Self {
            id: call.id.clone(),
            kind: "function".to_string(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.to_string(),
            },
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> LlmConfig {
        LlmConfig {
            api_key: "test-key".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/openai/".to_string(),
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.7,
            max_tokens: 8192,
        }
    }

    #[test]
    fn test_api_url_trims_trailing_slash() {
        let client = GeminiClient::new(test_config()).unwrap();
        assert_eq!(
            client.api_url(),
            "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
        );
    }

    #[test]
    fn test_wire_message_from_tool_result() {
        let msg = ChatMessage::tool_result("call_1", &serde_json::json!({"ok": true}));
        let wire = WireMessage::from(&msg);
        assert_eq!(wire.role, "tool");
        assert_eq!(wire.tool_call_id, Some("call_1".to_string()));
        assert!(wire.tool_calls.is_none());
    }

    #[test]
    fn test_wire_tool_call_arguments_roundtrip() {
        let call = ToolCall {
            id: "call_1".to_string(),
            name: "tavily_search_results".to_string(),
            arguments: serde_json::json!({"query": "capital of France"}),
        };
        let wire = WireToolCall::from(&call);
        assert_eq!(wire.function.name, "tavily_search_results");

        let parsed: serde_json::Value = serde_json::from_str(&wire.function.arguments).unwrap();
        assert_eq!(parsed["query"], "capital of France");
    }

    #[test]
    fn test_response_parse_with_tool_calls() {
        let body = serde_json::json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "tavily_search_results",
                            "arguments": "{\"query\": \"latest news\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        });

        let parsed: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let choice = &parsed.choices[0];
        assert_eq!(choice.finish_reason.as_deref(), Some("tool_calls"));
        let calls = choice.message.tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].function.name, "tavily_search_results");
    }
}
