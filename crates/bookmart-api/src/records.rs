//! Row → wire model conversions.

use chrono::{DateTime, Utc};
use tracing::warn;

use bookmart_db::models::{ListingRow, OrderRow, PrincipalRow, WishlistRow};
use bookmart_types::api::PrincipalSummary;
use bookmart_types::models::{Listing, Order, Principal, WishlistEntry};

fn created_at(raw: &str, id: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>().unwrap_or_else(|e| {
        warn!("Corrupt created_at '{}' on record '{}': {}", raw, id, e);
        DateTime::default()
    })
}

/// Admin-facing account record; the password hash is left behind.
pub fn principal(row: PrincipalRow) -> Principal {
    Principal {
        created_at: created_at(&row.created_at, &row.id),
        id: row.id,
        name: row.name,
        email: row.email,
    }
}

pub fn summary(row: PrincipalRow) -> PrincipalSummary {
    PrincipalSummary {
        id: row.id,
        name: row.name,
        email: row.email,
    }
}

pub fn listing(row: ListingRow) -> Listing {
    Listing {
        created_at: created_at(&row.created_at, &row.id),
        id: row.id,
        title: row.title,
        author: row.author,
        genre: row.genre,
        description: row.description,
        price: row.price,
        image_path: row.image_path,
        owner_id: row.owner_id,
        owner_name: row.owner_name,
    }
}

pub fn order(row: OrderRow) -> Order {
    Order {
        created_at: created_at(&row.created_at, &row.id),
        id: row.id,
        flat_no: row.flat_no,
        city: row.city,
        state: row.state,
        pincode: row.pincode,
        total_amount: row.total_amount,
        seller_name: row.seller_name,
        seller_id: row.seller_id,
        booking_date: row.booking_date,
        description: row.description,
        delivery: row.delivery,
        buyer_id: row.buyer_id,
        buyer_name: row.buyer_name,
        book_title: row.book_title,
        book_author: row.book_author,
        book_genre: row.book_genre,
        book_image: row.book_image,
    }
}

pub fn wishlist_entry(row: WishlistRow) -> WishlistEntry {
    WishlistEntry {
        created_at: created_at(&row.created_at, &row.id),
        id: row.id,
        item_id: row.item_id,
        title: row.title,
        image_path: row.image_path,
        user_id: row.user_id,
        user_name: row.user_name,
    }
}
