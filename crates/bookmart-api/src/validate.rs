use crate::error::ApiError;

/// Presence check for a required field. Absent, `null` and `""` are all
/// treated as missing and fail with the route's static `message`.
pub fn required<S: Into<String>>(value: Option<S>, message: &'static str) -> Result<String, ApiError> {
    optional(value).ok_or(ApiError::MissingFields(message))
}

/// Optional field; an empty string is stored as absent.
pub fn optional<S: Into<String>>(value: Option<S>) -> Option<String> {
    value.map(Into::into).filter(|v| !v.is_empty())
}
