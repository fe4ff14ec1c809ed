use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use bookmart_types::models::{Principal, PrincipalKind};

use crate::error::ApiError;
use crate::records;
use crate::state::{AppState, blocking};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<Principal>>, ApiError> {
    list_principals(&state, PrincipalKind::User).await
}

/// GET /sellers
pub async fn list_sellers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Principal>>, ApiError> {
    list_principals(&state, PrincipalKind::Seller).await
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_principal(&state, PrincipalKind::User, id).await
}

/// DELETE /sellers/{id}
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    delete_principal(&state, PrincipalKind::Seller, id).await
}

async fn list_principals(
    state: &AppState,
    kind: PrincipalKind,
) -> Result<Json<Vec<Principal>>, ApiError> {
    let rows = blocking(state, move |s| s.store.list_principals(kind)).await?;
    Ok(Json(rows.into_iter().map(records::principal).collect()))
}

// No existence check: deleting an unknown id answers 200 like a real delete.
async fn delete_principal(
    state: &AppState,
    kind: PrincipalKind,
    id: String,
) -> Result<StatusCode, ApiError> {
    let removed = blocking(state, move |s| s.store.delete_principal(kind, &id)).await?;
    info!("Deleted {} {} row(s)", removed, kind.as_str());
    Ok(StatusCode::OK)
}
