use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow};
use argon2::Params;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt; // for `oneshot`

use bookmart_api::password::Argon2Hasher;
use bookmart_api::uploads::DiskImageStore;
use bookmart_api::{AppStateInner, router};
use bookmart_db::models::{
    ListingFilter, ListingRow, NewListing, NewOrder, NewPrincipal, NewWishlistEntry, OrderFilter,
    OrderRow, PrincipalRow, WishlistRow,
};
use bookmart_db::{Database, EntityStore};
use bookmart_types::models::PrincipalKind;

/// Real in-memory database that counts every call made against it.
struct SpyStore {
    inner: Database,
    calls: Arc<AtomicUsize>,
}

impl SpyStore {
    fn hit(&self) -> &Database {
        self.calls.fetch_add(1, Ordering::SeqCst);
        &self.inner
    }
}

impl EntityStore for SpyStore {
    fn find_principal_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<PrincipalRow>> {
        self.hit().find_principal_by_email(kind, email)
    }

    fn insert_principal(&self, kind: PrincipalKind, new: &NewPrincipal) -> Result<PrincipalRow> {
        self.hit().insert_principal(kind, new)
    }

    fn list_principals(&self, kind: PrincipalKind) -> Result<Vec<PrincipalRow>> {
        self.hit().list_principals(kind)
    }

    fn delete_principal(&self, kind: PrincipalKind, id: &str) -> Result<usize> {
        self.hit().delete_principal(kind, id)
    }

    fn insert_listing(&self, new: &NewListing) -> Result<ListingRow> {
        self.hit().insert_listing(new)
    }

    fn get_listing(&self, id: &str) -> Result<Option<ListingRow>> {
        self.hit().get_listing(id)
    }

    fn find_listings(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>> {
        self.hit().find_listings(filter)
    }

    fn delete_listing(&self, id: &str) -> Result<usize> {
        self.hit().delete_listing(id)
    }

    fn insert_order(&self, new: &NewOrder) -> Result<OrderRow> {
        self.hit().insert_order(new)
    }

    fn find_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRow>> {
        self.hit().find_orders(filter)
    }

    fn delete_order(&self, id: &str) -> Result<usize> {
        self.hit().delete_order(id)
    }

    fn find_wishlist(&self, user_id: &str) -> Result<Vec<WishlistRow>> {
        self.hit().find_wishlist(user_id)
    }

    fn insert_wishlist_if_absent(&self, new: &NewWishlistEntry) -> Result<Option<WishlistRow>> {
        self.hit().insert_wishlist_if_absent(new)
    }

    fn remove_wishlist(&self, item_id: &str, user_id: &str) -> Result<usize> {
        self.hit().remove_wishlist(item_id, user_id)
    }
}

/// Store whose every call fails the way a broken disk would.
struct FailingStore;

const STORE_FAILURE: &str = "disk I/O error";

impl EntityStore for FailingStore {
    fn find_principal_by_email(&self, _: PrincipalKind, _: &str) -> Result<Option<PrincipalRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn insert_principal(&self, _: PrincipalKind, _: &NewPrincipal) -> Result<PrincipalRow> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn list_principals(&self, _: PrincipalKind) -> Result<Vec<PrincipalRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn delete_principal(&self, _: PrincipalKind, _: &str) -> Result<usize> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn insert_listing(&self, _: &NewListing) -> Result<ListingRow> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn get_listing(&self, _: &str) -> Result<Option<ListingRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn find_listings(&self, _: &ListingFilter) -> Result<Vec<ListingRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn delete_listing(&self, _: &str) -> Result<usize> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn insert_order(&self, _: &NewOrder) -> Result<OrderRow> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn find_orders(&self, _: &OrderFilter) -> Result<Vec<OrderRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn delete_order(&self, _: &str) -> Result<usize> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn find_wishlist(&self, _: &str) -> Result<Vec<WishlistRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn insert_wishlist_if_absent(&self, _: &NewWishlistEntry) -> Result<Option<WishlistRow>> {
        Err(anyhow!(STORE_FAILURE))
    }

    fn remove_wishlist(&self, _: &str, _: &str) -> Result<usize> {
        Err(anyhow!(STORE_FAILURE))
    }
}

struct TestApp {
    router: Router,
    calls: Arc<AtomicUsize>,
    upload_dir: PathBuf,
    _tmp: TempDir,
}

impl TestApp {
    fn store_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn uploaded_files(&self) -> usize {
        std::fs::read_dir(&self.upload_dir).unwrap().count()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn multipart(
        &self,
        fields: &[(&str, &str)],
        image: Option<(&str, &[u8])>,
    ) -> (StatusCode, Value) {
        const BOUNDARY: &str = "bookmart-test-boundary";

        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, data)) = image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"itemImage\"; \
                     filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/listings")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }
}

async fn build_test_app() -> TestApp {
    let calls = Arc::new(AtomicUsize::new(0));
    let store = SpyStore {
        inner: Database::open_in_memory().expect("Failed to open test database"),
        calls: calls.clone(),
    };
    build_test_app_with(store, calls).await
}

async fn build_test_app_with(
    store: impl EntityStore + 'static,
    calls: Arc<AtomicUsize>,
) -> TestApp {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let upload_dir = tmp.path().join("uploads");
    let images = DiskImageStore::new(upload_dir.clone(), "uploads")
        .await
        .expect("Failed to create upload dir");

    // Cheap Argon2 parameters keep the suite fast
    let hasher = Argon2Hasher::with_params(Params::new(1024, 1, 1, None).unwrap());

    TestApp {
        router: router(AppStateInner::new(store, hasher, images)),
        calls,
        upload_dir,
        _tmp: tmp,
    }
}

async fn add_listing(app: &TestApp, title: &str, author: &str, genre: &str, owner: &str) -> Value {
    let (status, body) = app
        .multipart(
            &[
                ("title", title),
                ("author", author),
                ("genre", genre),
                ("price", "299"),
                ("userId", owner),
                ("userName", "Corner Books"),
            ],
            Some(("cover art.png", &b"\x89PNG"[..])),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn signup_then_login_end_to_end() {
    let app = build_test_app().await;

    let (status, body) = app
        .json(
            Method::POST,
            "/signup",
            json!({ "name": "A", "email": "a@x.com", "password": "p" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Status": "created" }));

    let (status, body) = app
        .json(Method::POST, "/login", json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Status"], "Success");
    assert_eq!(body["user"]["name"], "A");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());

    let (status, body) = app
        .json(Method::POST, "/login", json!({ "email": "a@x.com", "password": "wrong" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Status": "Invalid Password" }));

    let (_, body) = app
        .json(Method::POST, "/login", json!({ "email": "b@x.com", "password": "p" }))
        .await;
    assert_eq!(body, json!({ "Status": "User not found" }));
}

#[tokio::test]
async fn staff_logins_use_short_tags() {
    let app = build_test_app().await;

    for (signup, login) in [("/admin-signup", "/admin-login"), ("/seller-signup", "/seller-login")] {
        let (_, body) = app
            .json(
                Method::POST,
                signup,
                json!({ "name": "Root", "email": "root@x.com", "password": "s3cret" }),
            )
            .await;
        assert_eq!(body["Status"], "created");

        let (_, body) = app
            .json(Method::POST, login, json!({ "email": "root@x.com", "password": "nope" }))
            .await;
        assert_eq!(body["Status"], "login fail");

        let (_, body) = app
            .json(Method::POST, login, json!({ "email": "ghost@x.com", "password": "s3cret" }))
            .await;
        assert_eq!(body["Status"], "no user");

        let (_, body) = app
            .json(Method::POST, login, json!({ "email": "root@x.com", "password": "s3cret" }))
            .await;
        assert_eq!(body["Status"], "Success");
    }

    // An admin account is not a user account
    let (_, body) = app
        .json(Method::POST, "/login", json!({ "email": "root@x.com", "password": "s3cret" }))
        .await;
    assert_eq!(body["Status"], "User not found");
}

#[tokio::test]
async fn duplicate_signup_reports_exists_without_insert() {
    let app = build_test_app().await;
    let body = json!({ "name": "A", "email": "a@x.com", "password": "p" });

    app.json(Method::POST, "/signup", body.clone()).await;
    let (status, second) = app.json(Method::POST, "/signup", body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, json!({ "Status": "exists" }));

    let (status, users) = app.get("/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "a@x.com");
    assert!(users[0]["_id"].is_string());
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn missing_required_fields_never_reach_the_store() {
    let app = build_test_app().await;

    let cases = [
        ("/login", json!({ "email": "a@x.com" }), "Email and password required"),
        ("/admin-login", json!({ "email": "", "password": "p" }), "Email and password required"),
        ("/seller-signup", json!({ "name": "S", "email": "s@x.com", "password": null }), "All fields required"),
    ];
    for (uri, body, message) in cases {
        let (status, response) = app.json(Method::POST, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response, json!({ "Status": "error", "message": message }));
    }

    let cases = [
        (
            "/orders",
            json!({ "flatno": "1", "city": "Pune", "state": "MH", "booktitle": "Dune", "totalamount": 10 }),
            "Complete shipping address required",
        ),
        (
            "/orders",
            json!({ "flatno": "1", "city": "Pune", "state": "MH", "pincode": 411001, "booktitle": "" }),
            "Book title and amount required",
        ),
        ("/wishlist/add", json!({ "itemId": "b1" }), "itemId and userId required"),
        ("/wishlist/remove", json!({ "itemId": null, "userId": "u1" }), "itemId and userId required"),
    ];
    for (uri, body, message) in cases {
        let (status, response) = app.json(Method::POST, uri, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(response, json!({ "error": message }));
    }

    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let app = build_test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/wishlist/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn rejected_listing_leaves_no_upload_behind() {
    let app = build_test_app().await;

    let (status, body) = app
        .multipart(&[("title", "Dune"), ("author", "Frank Herbert")], None)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Image file is required" }));

    let (status, body) = app
        .multipart(
            &[("title", "Dune"), ("author", "Frank Herbert"), ("genre", "Sci-Fi")],
            Some(("cover.png", &b"\x89PNG"[..])),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Title, author, genre and price are required" })
    );

    assert_eq!(app.uploaded_files(), 0);
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn listing_create_fetch_and_search() {
    let app = build_test_app().await;

    let dune = add_listing(&app, "Dune", "Frank Herbert", "Sci-Fi", "s1").await;
    add_listing(&app, "Emma", "Jane Austen", "Romance", "s1").await;
    add_listing(&app, "Herbal Remedies", "Ann Lee", "Health", "s2").await;

    let image = dune["itemImage"].as_str().unwrap();
    assert!(image.starts_with("uploads/"));
    assert!(image.ends_with("-cover_art.png"));
    assert_eq!(dune["userId"], "s1");
    assert_eq!(dune["price"], "299");
    assert_eq!(app.uploaded_files(), 3);

    let id = dune["_id"].as_str().unwrap();
    let (status, fetched) = app.get(&format!("/listings/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Dune");

    let (status, missing) = app.get("/listings/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing, json!({ "error": "Item not found" }));

    let titles = |body: Value| -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|l| l["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (_, all) = app.get("/listings").await;
    assert_eq!(titles(all), vec!["Herbal Remedies", "Emma", "Dune"]);

    let (_, hits) = app.get("/listings?search=HERB").await;
    assert_eq!(titles(hits), vec!["Herbal Remedies", "Dune"]);

    let (_, hits) = app.get("/listings?genre=romance").await;
    assert_eq!(titles(hits), vec!["Emma"]);

    let (_, hits) = app.get("/listings?search=herb&genre=sci").await;
    assert_eq!(titles(hits), vec!["Dune"]);

    let (_, mine) = app.get("/listings/by-owner/s1").await;
    assert_eq!(titles(mine), vec!["Dune", "Emma"]);
}

#[tokio::test]
async fn listing_search_folds_accented_letters() {
    let app = build_test_app().await;
    add_listing(&app, "Émile", "Jean-Jacques Rousseau", "Philosophie", "s1").await;
    add_listing(&app, "Emma", "Jane Austen", "Romance", "s1").await;

    for uri in ["/listings?search=%C3%A9mile", "/listings?search=%C3%89MILE"] {
        let (status, hits) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        let hits = hits.as_array().unwrap();
        assert_eq!(hits.len(), 1, "{uri}");
        assert_eq!(hits[0]["title"], "Émile");
    }

    let (_, hits) = app.get("/listings?genre=PHILOSOPHIE").await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn orders_keep_snapshot_and_sort_newest_first() {
    let app = build_test_app().await;
    let dune = add_listing(&app, "Dune", "Frank Herbert", "Sci-Fi", "s1").await;

    for (buyer, title) in [("u1", "Dune"), ("u2", "Dune, again"), ("u1", "Emma")] {
        let (status, order) = app
            .json(
                Method::POST,
                "/orders",
                json!({
                    "flatno": "12B", "city": "Pune", "state": "MH", "pincode": 411001,
                    "totalamount": 299, "seller": "Corner Books", "sellerId": "s1",
                    "userId": buyer, "userName": "Reader",
                    "booktitle": title, "bookauthor": "Frank Herbert",
                    "itemImage": dune["itemImage"],
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(order["pincode"], "411001");
        assert_eq!(order["totalamount"], "299");
    }

    // Deleting the listing does not touch the orders placed against it
    let (status, _) = app
        .delete(&format!("/listings/{}", dune["_id"].as_str().unwrap()))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, all) = app.get("/orders").await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["booktitle"], "Emma");
    assert_eq!(all[2]["booktitle"], "Dune");
    assert_eq!(all[2]["itemImage"], dune["itemImage"]);

    let (_, mine) = app.get("/orders/by-user/u1").await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[0]["booktitle"], "Emma");

    let (_, sold) = app.get("/listings/orders-for-seller/s1").await;
    assert_eq!(sold.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn wishlist_add_is_unique_per_item_and_user() {
    let app = build_test_app().await;
    let entry = json!({ "itemId": "b1", "userId": "u1", "title": "Dune" });

    let (status, first) = app.json(Method::POST, "/wishlist/add", entry.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["itemId"], "b1");
    assert_eq!(first["userId"], "u1");

    let (status, second) = app.json(Method::POST, "/wishlist/add", entry).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second, json!({ "msg": "Item already in wishlist" }));

    let (_, list) = app.get("/wishlist/u1").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn wishlist_remove_only_touches_the_callers_entry() {
    let app = build_test_app().await;

    for user in ["u1", "u2"] {
        let (status, _) = app
            .json(Method::POST, "/wishlist/add", json!({ "itemId": "b1", "userId": user }))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = app
        .json(Method::POST, "/wishlist/remove", json!({ "itemId": "b1", "userId": "u1" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Removed from wishlist" }));

    let (_, mine) = app.get("/wishlist/u1").await;
    assert!(mine.as_array().unwrap().is_empty());

    let (_, theirs) = app.get("/wishlist/u2").await;
    assert_eq!(theirs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_unknown_ids_still_succeeds() {
    let app = build_test_app().await;

    for uri in ["/users/nope", "/sellers/nope", "/orders/nope", "/listings/nope"] {
        let (status, body) = app.delete(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, Value::Null);
    }
}

#[tokio::test]
async fn seller_delete_removes_only_that_seller() {
    let app = build_test_app().await;

    for email in ["one@x.com", "two@x.com"] {
        app.json(
            Method::POST,
            "/seller-signup",
            json!({ "name": "S", "email": email, "password": "p" }),
        )
        .await;
    }

    let (_, sellers) = app.get("/sellers").await;
    let sellers = sellers.as_array().unwrap().clone();
    assert_eq!(sellers.len(), 2);
    assert!(sellers[0].get("password").is_none());

    let id = sellers[0]["_id"].as_str().unwrap();
    let (status, _) = app.delete(&format!("/sellers/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, remaining) = app.get("/sellers").await;
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["email"], "two@x.com");
}

#[tokio::test]
async fn unmatched_route_names_method_and_path() {
    let app = build_test_app().await;

    let (status, body) = app.get("/nowhere/else").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Route GET /nowhere/else not found" }));

    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/users")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Route PATCH /users not found" }));

    let (status, body) = app.delete("/wishlist/u1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Route DELETE /wishlist/u1 not found" }));
}

#[tokio::test]
async fn store_failure_is_a_500_with_the_store_message() {
    let app = build_test_app_with(FailingStore, Arc::new(AtomicUsize::new(0))).await;

    for uri in ["/users", "/listings", "/orders", "/wishlist/u1"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(body, json!({ "error": STORE_FAILURE }));
    }

    let (status, body) = app.delete("/orders/o1").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": STORE_FAILURE }));

    let (status, body) = app
        .json(Method::POST, "/login", json!({ "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "Status": "error", "message": STORE_FAILURE }));

    let (status, body) = app
        .json(
            Method::POST,
            "/seller-signup",
            json!({ "name": "S", "email": "s@x.com", "password": "p" }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "Status": "error", "message": STORE_FAILURE }));
}

#[tokio::test]
async fn health_check() {
    let app = build_test_app().await;

    let (status, body) = app.get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Bookmart API running");
}
