use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::PrincipalKind;

// -- Field values --

/// A body field read as text. JSON clients send prices and pincodes as
/// either strings or numbers, so numbers and booleans are accepted in their
/// textual form. `null` and a missing key both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue(pub String);

impl From<TextValue> for String {
    fn from(value: TextValue) -> Self {
        value.0
    }
}

impl From<&str> for TextValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for TextValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TextVisitor;

        impl Visitor<'_> for TextVisitor {
            type Value = TextValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TextValue, E> {
                Ok(TextValue(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<TextValue, E> {
                Ok(TextValue(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TextValue, E> {
                Ok(TextValue(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TextValue, E> {
                Ok(TextValue(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<TextValue, E> {
                Ok(TextValue(v.to_string()))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<TextValue, E> {
                Ok(TextValue(v.to_string()))
            }
        }

        deserializer.deserialize_any(TextVisitor)
    }
}

// -- Auth --

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<TextValue>,
    pub password: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    pub name: Option<TextValue>,
    pub email: Option<TextValue>,
    pub password: Option<TextValue>,
}

/// Public view of an account returned on successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipalSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Business outcome of a login or signup. Carried in the response body,
/// independent of the HTTP status the transport picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    NoUser,
    LoginFail,
    Success(PrincipalSummary),
    Exists,
    Created,
}

impl AuthOutcome {
    /// Status tag as the given kind of account reports it. Users get the
    /// wordier tags the storefront client matches on.
    pub fn tag(&self, kind: PrincipalKind) -> &'static str {
        match (self, kind) {
            (Self::NoUser, PrincipalKind::User) => "User not found",
            (Self::NoUser, _) => "no user",
            (Self::LoginFail, PrincipalKind::User) => "Invalid Password",
            (Self::LoginFail, _) => "login fail",
            (Self::Success(_), _) => "Success",
            (Self::Exists, _) => "exists",
            (Self::Created, _) => "created",
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<PrincipalSummary>,
}

impl StatusResponse {
    pub fn new(kind: PrincipalKind, outcome: AuthOutcome) -> Self {
        let status = outcome.tag(kind).to_string();
        let user = match outcome {
            AuthOutcome::Success(summary) => Some(summary),
            _ => None,
        };
        Self { status, user }
    }
}

// -- Listings --

#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub genre: Option<String>,
}

// -- Orders --

#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub flatno: Option<TextValue>,
    pub city: Option<TextValue>,
    pub state: Option<TextValue>,
    pub pincode: Option<TextValue>,
    pub totalamount: Option<TextValue>,
    pub seller: Option<TextValue>,
    #[serde(rename = "sellerId")]
    pub seller_id: Option<TextValue>,
    #[serde(rename = "BookingDate")]
    pub booking_date: Option<TextValue>,
    pub description: Option<TextValue>,
    #[serde(rename = "Delivery")]
    pub delivery: Option<TextValue>,
    #[serde(rename = "userId")]
    pub user_id: Option<TextValue>,
    #[serde(rename = "userName")]
    pub user_name: Option<TextValue>,
    pub booktitle: Option<TextValue>,
    pub bookauthor: Option<TextValue>,
    pub bookgenre: Option<TextValue>,
    #[serde(rename = "itemImage")]
    pub item_image: Option<TextValue>,
}

// -- Wishlist --

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistAddRequest {
    pub item_id: Option<TextValue>,
    pub title: Option<TextValue>,
    pub item_image: Option<TextValue>,
    pub user_id: Option<TextValue>,
    pub user_name: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistRemoveRequest {
    pub item_id: Option<TextValue>,
    pub user_id: Option<TextValue>,
}

// -- Misc --

/// Plain `{ "msg": ... }` confirmation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MsgResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
