use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use bookmart_db::models::{NewOrder, OrderFilter};
use bookmart_types::api::CreateOrderRequest;
use bookmart_types::models::Order;

use crate::error::ApiError;
use crate::records;
use crate::state::{AppState, blocking};
use crate::validate::{optional, required};

const ADDRESS_FIELDS: &str = "Complete shipping address required";
const BOOK_FIELDS: &str = "Book title and amount required";

/// POST /orders. The book fields are copied into the order as sent.
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;

    let flat_no = required(req.flatno, ADDRESS_FIELDS)?;
    let city = required(req.city, ADDRESS_FIELDS)?;
    let region = required(req.state, ADDRESS_FIELDS)?;
    let pincode = required(req.pincode, ADDRESS_FIELDS)?;
    let book_title = required(req.booktitle, BOOK_FIELDS)?;
    let total_amount = required(req.totalamount, BOOK_FIELDS)?;

    let new = NewOrder {
        flat_no,
        city,
        state: region,
        pincode,
        total_amount,
        seller_name: optional(req.seller),
        seller_id: optional(req.seller_id),
        booking_date: optional(req.booking_date),
        description: optional(req.description),
        delivery: optional(req.delivery),
        buyer_id: optional(req.user_id),
        buyer_name: optional(req.user_name),
        book_title,
        book_author: optional(req.bookauthor),
        book_genre: optional(req.bookgenre),
        book_image: optional(req.item_image),
    };

    let row = blocking(&state, move |s| s.store.insert_order(&new)).await?;
    info!("Order {} placed", row.id);

    Ok((StatusCode::CREATED, Json(records::order(row))))
}

/// GET /orders — every order, newest first.
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    find_orders(&state, OrderFilter::default()).await
}

/// GET /orders/by-user/{user_id}
pub async fn orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let filter = OrderFilter {
        buyer_id: Some(user_id),
        ..Default::default()
    };
    find_orders(&state, filter).await
}

/// GET /listings/orders-for-seller/{owner_id}
pub async fn orders_for_seller(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let filter = OrderFilter {
        seller_id: Some(owner_id),
        ..Default::default()
    };
    find_orders(&state, filter).await
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = blocking(&state, move |s| s.store.delete_order(&id)).await?;
    info!("Deleted {} order row(s)", removed);
    Ok(StatusCode::OK)
}

async fn find_orders(state: &AppState, filter: OrderFilter) -> Result<Json<Vec<Order>>, ApiError> {
    let rows = blocking(state, move |s| s.store.find_orders(&filter)).await?;
    Ok(Json(rows.into_iter().map(records::order).collect()))
}
