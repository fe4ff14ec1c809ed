pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

use bookmart_types::models::PrincipalKind;

use crate::models::{
    ListingFilter, ListingRow, NewListing, NewOrder, NewPrincipal, NewWishlistEntry, OrderFilter,
    OrderRow, PrincipalRow, WishlistRow,
};

/// Persistence operations the request handlers are allowed to perform.
///
/// Every handler issues exactly one logical call against this trait, so a
/// test double can observe whether the store was touched at all. Methods are
/// blocking; async callers run them on the blocking pool.
pub trait EntityStore: Send + Sync {
    // -- Principals (admins, sellers, users) --

    fn find_principal_by_email(&self, kind: PrincipalKind, email: &str)
    -> Result<Option<PrincipalRow>>;

    fn insert_principal(&self, kind: PrincipalKind, new: &NewPrincipal) -> Result<PrincipalRow>;

    fn list_principals(&self, kind: PrincipalKind) -> Result<Vec<PrincipalRow>>;

    /// Returns the number of rows removed. Callers treat 0 and 1 alike.
    fn delete_principal(&self, kind: PrincipalKind, id: &str) -> Result<usize>;

    // -- Listings --

    fn insert_listing(&self, new: &NewListing) -> Result<ListingRow>;

    fn get_listing(&self, id: &str) -> Result<Option<ListingRow>>;

    fn find_listings(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>>;

    fn delete_listing(&self, id: &str) -> Result<usize>;

    // -- Orders --

    fn insert_order(&self, new: &NewOrder) -> Result<OrderRow>;

    /// Matching orders, newest first.
    fn find_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRow>>;

    fn delete_order(&self, id: &str) -> Result<usize>;

    // -- Wishlist --

    fn find_wishlist(&self, user_id: &str) -> Result<Vec<WishlistRow>>;

    /// Inserts the entry unless one already exists for the same
    /// `(item_id, user_id)` pair. Returns `None` when it already existed.
    fn insert_wishlist_if_absent(&self, new: &NewWishlistEntry) -> Result<Option<WishlistRow>>;

    /// Removes the entry matching both `item_id` and `user_id`.
    fn remove_wishlist(&self, item_id: &str, user_id: &str) -> Result<usize>;
}

pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for concurrent reads
        conn.pragma_update(None, "journal_mode", "WAL")?;

        register_functions(&conn)?;
        migrations::run(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Private in-memory database, used by tests and throwaway runs.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_functions(&conn)?;
        migrations::run(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;
        f(&conn)
    }
}

/// SQLite's built-in `lower()` only folds ASCII. `fold_case(x)` lowercases
/// with full Unicode rules so search matches `Émile` against `émile`.
fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        "fold_case",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|v| v.to_lowercase()))
        },
    )?;
    Ok(())
}
