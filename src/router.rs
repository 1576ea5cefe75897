use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::UserStore;
use crate::handlers::users::{list_users, register_user};

/// Shared per-request state. The store (and its pool) is created once at
/// startup and injected here so tests can substitute their own.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }
}

/// Route table with CORS pinned to the single allowed origin and
/// per-request HTTP traces.
pub fn app_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/registro", post(register_user))
        .route("/usuarios", get(list_users))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
