use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three kinds of account that can sign up and log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Admin,
    Seller,
    User,
}

impl PrincipalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Seller => "seller",
            Self::User => "user",
        }
    }
}

/// An account as listed to admins. The password hash never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A book put up for sale by a seller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: String,
    #[serde(rename = "itemImage")]
    pub image_path: String,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A placed order. The book fields are a snapshot of the listing at order
/// time and are not updated if the listing changes or disappears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "flatno")]
    pub flat_no: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(rename = "totalamount")]
    pub total_amount: String,
    #[serde(rename = "seller", skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(rename = "sellerId", skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<String>,
    #[serde(rename = "BookingDate", skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Delivery", skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "userName", skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    #[serde(rename = "booktitle")]
    pub book_title: String,
    #[serde(rename = "bookauthor", skip_serializing_if = "Option::is_none")]
    pub book_author: Option<String>,
    #[serde(rename = "bookgenre", skip_serializing_if = "Option::is_none")]
    pub book_genre: Option<String>,
    #[serde(rename = "itemImage", skip_serializing_if = "Option::is_none")]
    pub book_image: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "itemImage", skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
