use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, Path, Query, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, info};

use bookmart_db::models::{ListingFilter, NewListing};
use bookmart_types::api::ListingQuery;
use bookmart_types::models::Listing;

use crate::error::ApiError;
use crate::records;
use crate::state::{AppState, blocking};
use crate::validate::{optional, required};

/// Multipart field carrying the cover image.
pub const IMAGE_FIELD: &str = "itemImage";

/// Cover images can be larger than axum's default body limit.
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

const IMAGE_REQUIRED: &str = "Image file is required";
const LISTING_FIELDS: &str = "Title, author, genre and price are required";

/// POST /listings — multipart form with the text fields and one image.
///
/// The whole form is read and validated before the image is written, so a
/// rejected request leaves nothing behind in the upload directory.
pub async fn create_listing(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or("upload").to_owned();
            let data = field.bytes().await?;
            if !data.is_empty() {
                image = Some((file_name, data));
            }
        } else {
            let value = field.text().await?;
            fields.insert(name, value);
        }
    }

    let (file_name, data) = image.ok_or(ApiError::MissingFields(IMAGE_REQUIRED))?;
    let title = required(fields.remove("title"), LISTING_FIELDS)?;
    let author = required(fields.remove("author"), LISTING_FIELDS)?;
    let genre = required(fields.remove("genre"), LISTING_FIELDS)?;
    let price = required(fields.remove("price"), LISTING_FIELDS)?;

    let image_path = state.images.save(&file_name, data).await.map_err(|e| {
        error!("Failed to store upload {}: {:#}", file_name, e);
        ApiError::Internal(e.to_string())
    })?;

    let new = NewListing {
        title,
        author,
        genre,
        description: optional(fields.remove("description")),
        price,
        image_path,
        owner_id: optional(fields.remove("userId")),
        owner_name: optional(fields.remove("userName")),
    };

    let row = blocking(&state, move |s| s.store.insert_listing(&new)).await?;
    info!("Listing {} created", row.id);

    Ok((StatusCode::CREATED, Json(records::listing(row))))
}

/// GET /listings?search=&genre=
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let filter = ListingFilter {
        search: query.search,
        genre: query.genre,
        newest_first: true,
        ..Default::default()
    };

    let rows = blocking(&state, move |s| s.store.find_listings(&filter)).await?;
    Ok(Json(rows.into_iter().map(records::listing).collect()))
}

/// GET /listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Listing>, ApiError> {
    blocking(&state, move |s| s.store.get_listing(&id))
        .await?
        .map(|row| Json(records::listing(row)))
        .ok_or(ApiError::NotFound("Item not found"))
}

/// GET /listings/by-owner/{owner_id}
pub async fn listings_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<Listing>>, ApiError> {
    let filter = ListingFilter {
        owner_id: Some(owner_id),
        ..Default::default()
    };

    let rows = blocking(&state, move |s| s.store.find_listings(&filter)).await?;
    Ok(Json(rows.into_iter().map(records::listing).collect()))
}

/// DELETE /listings/{id}. Orders and wishlist entries referencing the
/// listing are left alone.
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = blocking(&state, move |s| s.store.delete_listing(&id)).await?;
    info!("Deleted {} listing row(s)", removed);
    Ok(StatusCode::OK)
}
