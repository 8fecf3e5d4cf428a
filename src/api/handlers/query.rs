use crate::{
    types::{AgentRun, AppError, QueryRequest, QueryResponse, Result},
    AppState,
};
use axum::{extract::State, response::Html, Form, Json};
use base64::Engine;

/// Render the homepage query form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}

/// Process a user's query: run the agent loop to completion, then
/// serialize the terminal result.
pub async fn process_query(
    State(state): State<AppState>,
    Form(payload): Form<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let query = payload.query.trim();
    if query.is_empty() {
        return Err(AppError::InvalidInput(
            "Form field 'query' must not be empty".to_string(),
        ));
    }

    tracing::info!(%query, "processing query");
    let run = state.executor.run(query).await?;

    let raw_json = serde_json::to_string(&run)
        .map_err(|e| AppError::Internal(format!("Failed to serialize run: {}", e)))?;
    let raw_data = base64::engine::general_purpose::STANDARD.encode(raw_json);

    let url = first_result_url(&run)?;

    Ok(Json(QueryResponse {
        raw_data,
        desired_output: run.output,
        url,
    }))
}

/// Extract the URL of the first item of the first observation.
///
/// Returns `None` when no tool was invoked at all; fails with a shape
/// mismatch when a tool ran but its observation is not a non-empty array
/// of objects carrying a `url` string.
fn first_result_url(run: &AgentRun) -> Result<Option<String>> {
    let step = match run.intermediate_steps.first() {
        Some(step) => step,
        None => return Ok(None),
    };

    let items = step.observation.as_array().ok_or_else(|| {
        AppError::ShapeMismatch("First observation is not a list of results".to_string())
    })?;
    let first = items.first().ok_or_else(|| {
        AppError::ShapeMismatch("First observation contains no results".to_string())
    })?;
    let url = first.get("url").and_then(|v| v.as_str()).ok_or_else(|| {
        AppError::ShapeMismatch("First search result has no 'url' field".to_string())
    })?;

    Ok(Some(url.to_string()))
}
