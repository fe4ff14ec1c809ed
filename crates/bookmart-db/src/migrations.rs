use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS admins (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_admins_email ON admins(email);

        CREATE TABLE IF NOT EXISTS sellers (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sellers_email ON sellers(email);

        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT NOT NULL,
            password    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_users_email ON users(email);

        CREATE TABLE IF NOT EXISTS listings (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            author      TEXT NOT NULL,
            genre       TEXT NOT NULL,
            description TEXT,
            price       TEXT NOT NULL,
            image_path  TEXT NOT NULL,
            owner_id    TEXT,
            owner_name  TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_listings_owner ON listings(owner_id);

        -- Book columns are a snapshot taken at order time. No foreign key to
        -- listings: an order outlives the listing it was placed against.
        CREATE TABLE IF NOT EXISTS orders (
            id            TEXT PRIMARY KEY,
            flat_no       TEXT NOT NULL,
            city          TEXT NOT NULL,
            state         TEXT NOT NULL,
            pincode       TEXT NOT NULL,
            total_amount  TEXT NOT NULL,
            seller_name   TEXT,
            seller_id     TEXT,
            booking_date  TEXT,
            description   TEXT,
            delivery      TEXT,
            buyer_id      TEXT,
            buyer_name    TEXT,
            book_title    TEXT NOT NULL,
            book_author   TEXT,
            book_genre    TEXT,
            book_image    TEXT,
            created_at    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_orders_buyer ON orders(buyer_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_orders_seller ON orders(seller_id, created_at);

        CREATE TABLE IF NOT EXISTS wishlist (
            id          TEXT PRIMARY KEY,
            item_id     TEXT NOT NULL,
            title       TEXT,
            image_path  TEXT,
            user_id     TEXT NOT NULL,
            user_name   TEXT,
            created_at  TEXT NOT NULL,
            UNIQUE(item_id, user_id)
        );

        CREATE INDEX IF NOT EXISTS idx_wishlist_user ON wishlist(user_id);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
