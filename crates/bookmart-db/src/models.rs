/// Database row types — these map directly to SQLite rows.
/// Distinct from bookmart-types API models to keep the DB layer independent.

#[derive(Debug, Clone)]
pub struct PrincipalRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct ListingRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub price: String,
    pub image_path: String,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub flat_no: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub total_amount: String,
    pub seller_name: Option<String>,
    pub seller_id: Option<String>,
    pub booking_date: Option<String>,
    pub description: Option<String>,
    pub delivery: Option<String>,
    pub buyer_id: Option<String>,
    pub buyer_name: Option<String>,
    pub book_title: String,
    pub book_author: Option<String>,
    pub book_genre: Option<String>,
    pub book_image: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct WishlistRow {
    pub id: String,
    pub item_id: String,
    pub title: Option<String>,
    pub image_path: Option<String>,
    pub user_id: String,
    pub user_name: Option<String>,
    pub created_at: String,
}

// -- Inserts: validated input; the store assigns id and created_at --

#[derive(Debug, Clone)]
pub struct NewPrincipal {
    pub name: String,
    pub email: String,
    /// Already hashed by the caller.
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewListing {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: Option<String>,
    pub price: String,
    pub image_path: String,
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NewOrder {
    pub flat_no: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub total_amount: String,
    pub seller_name: Option<String>,
    pub seller_id: Option<String>,
    pub booking_date: Option<String>,
    pub description: Option<String>,
    pub delivery: Option<String>,
    pub buyer_id: Option<String>,
    pub buyer_name: Option<String>,
    pub book_title: String,
    pub book_author: Option<String>,
    pub book_genre: Option<String>,
    pub book_image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWishlistEntry {
    pub item_id: String,
    pub title: Option<String>,
    pub image_path: Option<String>,
    pub user_id: String,
    pub user_name: Option<String>,
}

// -- Filters --

/// Listing lookup. `search` matches title or author, `genre` matches genre;
/// both are case-insensitive substring matches and combine with AND.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub owner_id: Option<String>,
    pub search: Option<String>,
    pub genre: Option<String>,
    pub newest_first: bool,
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub buyer_id: Option<String>,
    pub seller_id: Option<String>,
}
