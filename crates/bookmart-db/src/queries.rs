use crate::models::{
    ListingFilter, ListingRow, NewListing, NewOrder, NewPrincipal, NewWishlistEntry, OrderFilter,
    OrderRow, PrincipalRow, WishlistRow,
};
use crate::{Database, EntityStore};
use anyhow::Result;
use bookmart_types::models::PrincipalKind;
use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, Row, params_from_iter};
use tracing::debug;
use uuid::Uuid;

const PRINCIPAL_COLUMNS: &str = "id, name, email, password, created_at";

const LISTING_COLUMNS: &str =
    "id, title, author, genre, description, price, image_path, owner_id, owner_name, created_at";

const ORDER_COLUMNS: &str = "id, flat_no, city, state, pincode, total_amount, seller_name, \
     seller_id, booking_date, description, delivery, buyer_id, buyer_name, book_title, \
     book_author, book_genre, book_image, created_at";

const WISHLIST_COLUMNS: &str = "id, item_id, title, image_path, user_id, user_name, created_at";

fn table(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::Admin => "admins",
        PrincipalKind::Seller => "sellers",
        PrincipalKind::User => "users",
    }
}

/// Creation timestamps are RFC 3339 with millisecond precision so that the
/// text ordering matches chronological ordering.
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl EntityStore for Database {
    // -- Principals --

    fn find_principal_by_email(
        &self,
        kind: PrincipalKind,
        email: &str,
    ) -> Result<Option<PrincipalRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {PRINCIPAL_COLUMNS} FROM {} WHERE email = ?1 ORDER BY rowid LIMIT 1",
                table(kind)
            );
            conn.query_row(&sql, [email], principal_from_row).optional()
        })
    }

    fn insert_principal(&self, kind: PrincipalKind, new: &NewPrincipal) -> Result<PrincipalRow> {
        let row = PrincipalRow {
            id: new_id(),
            name: new.name.clone(),
            email: new.email.clone(),
            password: new.password_hash.clone(),
            created_at: timestamp(),
        };

        self.with_conn(|conn| {
            let sql = format!(
                "INSERT INTO {} ({PRINCIPAL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)",
                table(kind)
            );
            conn.execute(
                &sql,
                (&row.id, &row.name, &row.email, &row.password, &row.created_at),
            )?;
            Ok(())
        })?;

        debug!("Inserted {} {}", kind.as_str(), row.id);
        Ok(row)
    }

    fn list_principals(&self, kind: PrincipalKind) -> Result<Vec<PrincipalRow>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {PRINCIPAL_COLUMNS} FROM {} ORDER BY rowid", table(kind));
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], principal_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn delete_principal(&self, kind: PrincipalKind, id: &str) -> Result<usize> {
        self.with_conn(|conn| {
            let sql = format!("DELETE FROM {} WHERE id = ?1", table(kind));
            Ok(conn.execute(&sql, [id])?)
        })
    }

    // -- Listings --

    fn insert_listing(&self, new: &NewListing) -> Result<ListingRow> {
        let row = ListingRow {
            id: new_id(),
            title: new.title.clone(),
            author: new.author.clone(),
            genre: new.genre.clone(),
            description: new.description.clone(),
            price: new.price.clone(),
            image_path: new.image_path.clone(),
            owner_id: new.owner_id.clone(),
            owner_name: new.owner_name.clone(),
            created_at: timestamp(),
        };

        self.with_conn(|conn| {
            conn.execute(
                &format!(
                    "INSERT INTO listings ({LISTING_COLUMNS}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                rusqlite::params![
                    row.id,
                    row.title,
                    row.author,
                    row.genre,
                    row.description,
                    row.price,
                    row.image_path,
                    row.owner_id,
                    row.owner_name,
                    row.created_at,
                ],
            )?;
            Ok(())
        })?;

        Ok(row)
    }

    fn get_listing(&self, id: &str) -> Result<Option<ListingRow>> {
        self.with_conn(|conn| {
            conn.query_row(
                &format!("SELECT {LISTING_COLUMNS} FROM listings WHERE id = ?1"),
                [id],
                listing_from_row,
            )
            .optional()
        })
    }

    fn find_listings(&self, filter: &ListingFilter) -> Result<Vec<ListingRow>> {
        self.with_conn(|conn| query_listings(conn, filter))
    }

    fn delete_listing(&self, id: &str) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM listings WHERE id = ?1", [id])?))
    }

    // -- Orders --

    fn insert_order(&self, new: &NewOrder) -> Result<OrderRow> {
        let row = OrderRow {
            id: new_id(),
            flat_no: new.flat_no.clone(),
            city: new.city.clone(),
            state: new.state.clone(),
            pincode: new.pincode.clone(),
            total_amount: new.total_amount.clone(),
            seller_name: new.seller_name.clone(),
            seller_id: new.seller_id.clone(),
            booking_date: new.booking_date.clone(),
            description: new.description.clone(),
            delivery: new.delivery.clone(),
            buyer_id: new.buyer_id.clone(),
            buyer_name: new.buyer_name.clone(),
            book_title: new.book_title.clone(),
            book_author: new.book_author.clone(),
            book_genre: new.book_genre.clone(),
            book_image: new.book_image.clone(),
            created_at: timestamp(),
        };

        self.with_conn(|conn| {
            conn.execute(
                &format!(
                    "INSERT INTO orders ({ORDER_COLUMNS}) VALUES \
                     (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18)"
                ),
                rusqlite::params![
                    row.id,
                    row.flat_no,
                    row.city,
                    row.state,
                    row.pincode,
                    row.total_amount,
                    row.seller_name,
                    row.seller_id,
                    row.booking_date,
                    row.description,
                    row.delivery,
                    row.buyer_id,
                    row.buyer_name,
                    row.book_title,
                    row.book_author,
                    row.book_genre,
                    row.book_image,
                    row.created_at,
                ],
            )?;
            Ok(())
        })?;

        Ok(row)
    }

    fn find_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRow>> {
        self.with_conn(|conn| query_orders(conn, filter))
    }

    fn delete_order(&self, id: &str) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM orders WHERE id = ?1", [id])?))
    }

    // -- Wishlist --

    fn find_wishlist(&self, user_id: &str) -> Result<Vec<WishlistRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {WISHLIST_COLUMNS} FROM wishlist WHERE user_id = ?1 ORDER BY rowid"
            ))?;
            let rows = stmt
                .query_map([user_id], wishlist_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    fn insert_wishlist_if_absent(&self, new: &NewWishlistEntry) -> Result<Option<WishlistRow>> {
        let row = WishlistRow {
            id: new_id(),
            item_id: new.item_id.clone(),
            title: new.title.clone(),
            image_path: new.image_path.clone(),
            user_id: new.user_id.clone(),
            user_name: new.user_name.clone(),
            created_at: timestamp(),
        };

        // Single statement against the UNIQUE(item_id, user_id) index, so two
        // concurrent adds cannot both succeed.
        let inserted = self.with_conn(|conn| {
            Ok(conn.execute(
                &format!(
                    "INSERT INTO wishlist ({WISHLIST_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) \
                     ON CONFLICT(item_id, user_id) DO NOTHING"
                ),
                rusqlite::params![
                    row.id,
                    row.item_id,
                    row.title,
                    row.image_path,
                    row.user_id,
                    row.user_name,
                    row.created_at,
                ],
            )?)
        })?;

        Ok((inserted == 1).then_some(row))
    }

    fn remove_wishlist(&self, item_id: &str, user_id: &str) -> Result<usize> {
        self.with_conn(|conn| {
            Ok(conn.execute(
                "DELETE FROM wishlist WHERE item_id = ?1 AND user_id = ?2",
                [item_id, user_id],
            )?)
        })
    }
}

fn query_listings(conn: &Connection, filter: &ListingFilter) -> Result<Vec<ListingRow>> {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(owner_id) = &filter.owner_id {
        params.push(owner_id.clone());
        clauses.push(format!("owner_id = ?{}", params.len()));
    }

    // instr() rather than LIKE so '%' and '_' in a search term stay literal
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        params.push(search.to_lowercase());
        let n = params.len();
        clauses.push(format!(
            "(instr(fold_case(title), ?{n}) > 0 OR instr(fold_case(author), ?{n}) > 0)"
        ));
    }

    if let Some(genre) = filter.genre.as_deref().filter(|g| !g.is_empty()) {
        params.push(genre.to_lowercase());
        clauses.push(format!("instr(fold_case(genre), ?{}) > 0", params.len()));
    }

    let mut sql = format!("SELECT {LISTING_COLUMNS} FROM listings");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    if filter.newest_first {
        sql.push_str(" ORDER BY created_at DESC, rowid DESC");
    } else {
        sql.push_str(" ORDER BY rowid");
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), listing_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn query_orders(conn: &Connection, filter: &OrderFilter) -> Result<Vec<OrderRow>> {
    let mut clauses: Vec<String> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(buyer_id) = &filter.buyer_id {
        params.push(buyer_id.clone());
        clauses.push(format!("buyer_id = ?{}", params.len()));
    }
    if let Some(seller_id) = &filter.seller_id {
        params.push(seller_id.clone());
        clauses.push(format!("seller_id = ?{}", params.len()));
    }

    let mut sql = format!("SELECT {ORDER_COLUMNS} FROM orders");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" ORDER BY created_at DESC, rowid DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), order_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}

fn principal_from_row(row: &Row<'_>) -> rusqlite::Result<PrincipalRow> {
    Ok(PrincipalRow {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password: row.get(3)?,
        created_at: row.get(4)?,
    })
}

fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<ListingRow> {
    Ok(ListingRow {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        genre: row.get(3)?,
        description: row.get(4)?,
        price: row.get(5)?,
        image_path: row.get(6)?,
        owner_id: row.get(7)?,
        owner_name: row.get(8)?,
        created_at: row.get(9)?,
    })
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<OrderRow> {
    Ok(OrderRow {
        id: row.get(0)?,
        flat_no: row.get(1)?,
        city: row.get(2)?,
        state: row.get(3)?,
        pincode: row.get(4)?,
        total_amount: row.get(5)?,
        seller_name: row.get(6)?,
        seller_id: row.get(7)?,
        booking_date: row.get(8)?,
        description: row.get(9)?,
        delivery: row.get(10)?,
        buyer_id: row.get(11)?,
        buyer_name: row.get(12)?,
        book_title: row.get(13)?,
        book_author: row.get(14)?,
        book_genre: row.get(15)?,
        book_image: row.get(16)?,
        created_at: row.get(17)?,
    })
}

fn wishlist_from_row(row: &Row<'_>) -> rusqlite::Result<WishlistRow> {
    Ok(WishlistRow {
        id: row.get(0)?,
        item_id: row.get(1)?,
        title: row.get(2)?,
        image_path: row.get(3)?,
        user_id: row.get(4)?,
        user_name: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
