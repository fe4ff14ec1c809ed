use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tracing::info;

use bookmart_db::models::NewWishlistEntry;
use bookmart_types::api::{MsgResponse, WishlistAddRequest, WishlistRemoveRequest};
use bookmart_types::models::WishlistEntry;

use crate::error::ApiError;
use crate::records;
use crate::state::{AppState, blocking};
use crate::validate::{optional, required};

const KEY_FIELDS: &str = "itemId and userId required";

/// GET /wishlist/{user_id}
pub async fn get_wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<WishlistEntry>>, ApiError> {
    let rows = blocking(&state, move |s| s.store.find_wishlist(&user_id)).await?;
    Ok(Json(rows.into_iter().map(records::wishlist_entry).collect()))
}

/// POST /wishlist/add — one entry per (itemId, userId); a repeat add is a
/// conflict and stores nothing.
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    body: Result<Json<WishlistAddRequest>, JsonRejection>,
) -> Result<Json<WishlistEntry>, ApiError> {
    let Json(req) = body?;
    let item_id = required(req.item_id, KEY_FIELDS)?;
    let user_id = required(req.user_id, KEY_FIELDS)?;

    let new = NewWishlistEntry {
        item_id,
        title: optional(req.title),
        image_path: optional(req.item_image),
        user_id,
        user_name: optional(req.user_name),
    };

    let row = blocking(&state, move |s| s.store.insert_wishlist_if_absent(&new))
        .await?
        .ok_or(ApiError::Conflict("Item already in wishlist"))?;

    info!("Wishlist entry {} added for user {}", row.id, row.user_id);
    Ok(Json(records::wishlist_entry(row)))
}

/// POST /wishlist/remove — only ever touches the caller's own entry.
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    body: Result<Json<WishlistRemoveRequest>, JsonRejection>,
) -> Result<Json<MsgResponse>, ApiError> {
    let Json(req) = body?;
    let item_id = required(req.item_id, KEY_FIELDS)?;
    let user_id = required(req.user_id, KEY_FIELDS)?;

    blocking(&state, move |s| s.store.remove_wishlist(&item_id, &user_id)).await?;

    Ok(Json(MsgResponse {
        msg: "Removed from wishlist".to_string(),
    }))
}
