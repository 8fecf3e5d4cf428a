//! Wire-level tests for the Gemini and Tavily HTTP clients, run against
//! a local wiremock server.

use scout::{
    config::{LlmConfig, SearchConfig},
    llm::client::ChatMessage,
    tools::registry::Tool,
    types::{AppError, ToolDefinition},
    GeminiClient, LLMClient, TavilySearchTool,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn llm_config(base_url: String) -> LlmConfig {
    LlmConfig {
        api_key: "test-key".to_string(),
        base_url,
        model: "gemini-1.5-pro".to_string(),
        temperature: 0.7,
        max_tokens: 8192,
    }
}

fn search_config(base_url: String) -> SearchConfig {
    SearchConfig {
        api_key: "test-key".to_string(),
        base_url,
        max_results: 1,
    }
}

fn search_tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: "tavily_search_results".to_string(),
        description: "Search the web".to_string(),
        parameters: json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        }),
    }
}

// ============= Gemini =============

#[tokio::test]
async fn test_gemini_text_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "gemini-1.5-pro"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": { "content": "Paris", "tool_calls": null },
                "finish_reason": "stop"
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(llm_config(server.uri())).unwrap();
    let response = client
        .generate_with_tools(
            &[
                ChatMessage::system("You are a helpful assistant."),
                ChatMessage::user("What is the capital of France?"),
            ],
            &[search_tool_definition()],
        )
        .await
        .unwrap();

    assert_eq!(response.content, "Paris");
    assert!(response.tool_calls.is_empty());
    assert_eq!(response.finish_reason, "stop");
}

#[tokio::test]
async fn test_gemini_tool_call_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_abc",
                        "type": "function",
                        "function": {
                            "name": "tavily_search_results",
                            "arguments": "{\"query\": \"latest news on X\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(llm_config(server.uri())).unwrap();
    let response = client
        .generate_with_tools(
            &[ChatMessage::user("Latest news on X")],
            &[search_tool_definition()],
        )
        .await
        .unwrap();

    assert!(response.content.is_empty());
    assert_eq!(response.tool_calls.len(), 1);
    let call = &response.tool_calls[0];
    assert_eq!(call.id, "call_abc");
    assert_eq!(call.name, "tavily_search_results");
    assert_eq!(call.arguments["query"], "latest news on X");
}

#[tokio::test]
async fn test_gemini_http_error_is_llm_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(llm_config(server.uri())).unwrap();
    let result = client
        .generate_with_tools(&[ChatMessage::user("hi")], &[])
        .await;

    match result {
        Err(AppError::Llm(msg)) => assert!(msg.contains("429")),
        other => panic!("expected Llm error, got {:?}", other.map(|r| r.content)),
    }
}

// ============= Tavily =============

#[tokio::test]
async fn test_tavily_search_observation_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(
            json!({"query": "rust", "max_results": 1}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "rust",
            "results": [{
                "title": "Rust",
                "url": "http://example.com",
                "content": "A language empowering everyone",
                "score": 0.99
            }]
        })))
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new(search_config(server.uri())).unwrap();
    let observation = tool.execute(json!({"query": "rust"})).await.unwrap();

    let items = observation.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["url"], "http://example.com");
    assert_eq!(items[0]["title"], "Rust");
    assert!(items[0]["content"].as_str().unwrap().contains("language"));
}

#[tokio::test]
async fn test_tavily_retries_transient_failures() {
    let server = MockServer::start().await;
    // First two attempts fail, the third succeeds
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"title": "t", "url": "http://example.com", "content": "c"}]
        })))
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new(search_config(server.uri())).unwrap();
    let observation = tool.execute(json!({"query": "rust"})).await.unwrap();
    assert_eq!(observation[0]["url"], "http://example.com");
}

#[tokio::test]
async fn test_tavily_persistent_failure_is_tool_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new(search_config(server.uri())).unwrap();
    let result = tool.execute(json!({"query": "rust"})).await;
    assert!(matches!(result, Err(AppError::Tool(_))));
}

#[tokio::test]
async fn test_tavily_empty_results_pass_through() {
    // An empty result list is a valid observation; shape handling is the
    // transport layer's concern
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let tool = TavilySearchTool::new(search_config(server.uri())).unwrap();
    let observation = tool.execute(json!({"query": "rust"})).await.unwrap();
    assert_eq!(observation, json!([]));
}
