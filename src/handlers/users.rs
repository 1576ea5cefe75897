use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::router::AppState;

/// Registration body. Fields are optional on purpose: absent values are
/// forwarded to the store as NULL, not rejected here.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub usuario: Option<String>,
    pub contra: Option<String>,
}

/// Fixed `{ ok, msg }` envelope returned by the registration endpoint and
/// by both endpoints on failure.
#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub ok: bool,
    pub msg: &'static str,
}

/// POST /registro -> inserts one user row.
///
/// Store failures collapse to a single generic message; the cause is
/// logged, never sent to the caller.
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Response {
    match state
        .store
        .insert_user(body.usuario.as_deref(), body.contra.as_deref())
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiStatus {
                ok: true,
                msg: "Usuario registrado",
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "user insert failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiStatus {
                    ok: false,
                    msg: "Error al registrar usuario",
                }),
            )
                .into_response()
        }
    }
}

/// GET /usuarios -> every stored user as a JSON array.
pub async fn list_users(State(state): State<AppState>) -> Response {
    match state.store.list_users().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => {
            error!(error = %e, "user listing failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiStatus {
                    ok: false,
                    msg: "Error en la base de datos",
                }),
            )
                .into_response()
        }
    }
}
