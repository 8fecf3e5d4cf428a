use anyhow::Context;
use scout::{
    agent::{AgentExecutor, ExecutorConfig},
    api, AppState, Config, GeminiClient, LLMClient, TavilySearchTool, ToolRegistry,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scout=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast on missing credentials, before binding the socket
    let config = Config::from_env().context("invalid configuration")?;

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(TavilySearchTool::new(config.search.clone())?))?;
    let registry = Arc::new(registry);

    let client: Arc<dyn LLMClient> = Arc::new(GeminiClient::new(config.llm.clone())?);
    let executor = Arc::new(AgentExecutor::new(
        client,
        registry,
        ExecutorConfig {
            max_iterations: config.agent.max_iterations,
            ..Default::default()
        },
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        executor,
    };

    let app = api::routes::create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state);

    tracing::info!(%addr, "starting scout server");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
