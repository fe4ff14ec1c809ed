use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    routing::{delete, get, post},
};

use bookmart_types::api::HealthResponse;

use crate::error::ApiError;
use crate::listings::MAX_UPLOAD_SIZE;
use crate::state::AppState;
use crate::{admin, auth, listings, orders, wishlist};

/// Every API route plus the JSON 404 fallback, which also answers a known
/// path called with the wrong method. Transport concerns (CORS,
/// tracing, static uploads) are layered on by the binary.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/admin-login", post(auth::admin_login))
        .route("/admin-signup", post(auth::admin_signup))
        .route("/seller-login", post(auth::seller_login))
        .route("/seller-signup", post(auth::seller_signup))
        .route("/login", post(auth::user_login))
        .route("/signup", post(auth::user_signup));

    let admin_routes = Router::new()
        .route("/users", get(admin::list_users))
        .route("/users/{id}", delete(admin::delete_user))
        .route("/sellers", get(admin::list_sellers))
        .route("/sellers/{id}", delete(admin::delete_seller));

    let listing_routes = Router::new()
        .route(
            "/listings",
            get(listings::list_listings)
                .post(listings::create_listing)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route(
            "/listings/{id}",
            get(listings::get_listing).delete(listings::delete_listing),
        )
        .route("/listings/by-owner/{owner_id}", get(listings::listings_by_owner))
        .route(
            "/listings/orders-for-seller/{owner_id}",
            get(orders::orders_for_seller),
        );

    let order_routes = Router::new()
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/{id}", delete(orders::delete_order))
        .route("/orders/by-user/{user_id}", get(orders::orders_by_user));

    let wishlist_routes = Router::new()
        .route("/wishlist/{user_id}", get(wishlist::get_wishlist))
        .route("/wishlist/add", post(wishlist::add_to_wishlist))
        .route("/wishlist/remove", post(wishlist::remove_from_wishlist));

    Router::new()
        .route("/", get(health))
        .merge(auth_routes)
        .merge(admin_routes)
        .merge(listing_routes)
        .merge(order_routes)
        .merge(wishlist_routes)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Bookmart API running".to_string(),
    })
}

async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}
