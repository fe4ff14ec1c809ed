pub mod admin;
pub mod auth;
pub mod error;
pub mod listings;
pub mod orders;
pub mod password;
pub mod records;
pub mod routes;
pub mod state;
pub mod uploads;
pub mod validate;
pub mod wishlist;

pub use routes::router;
pub use state::{AppState, AppStateInner};
