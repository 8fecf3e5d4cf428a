use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(crate::api::handlers::query::index))
        .route(
            "/process_query",
            post(crate::api::handlers::query::process_query),
        )
        .nest_service("/static", ServeDir::new("static"))
}
