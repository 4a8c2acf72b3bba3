//! Route composition.

pub mod common;
pub mod student;

pub use common::ops_routes;
pub use student::student_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: operational routes plus student CRUD, with tracing and a body size cap.
/// `DefaultBodyLimit` replaces axum's 2 MiB default; `JsonBody` turns an overrun into a 413 error envelope.
pub fn router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(student_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
