use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a document identifier from a path or body string.
///
/// # Arguments
/// - `value` - The string to attempt to parse into a `Uuid`
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The string is not a well-formed identifier
pub fn parse_id(value: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::BadRequest(format!("Invalid id: {}", value)))
}

/// Returns the value when present and non-blank.
///
/// # Arguments
/// - `name` - Parameter name used in the error message
/// - `value` - Optional query or body value
///
/// # Returns
/// - `Ok(&str)` - Trimmed, non-empty value
/// - `Err(AppError::BadRequest)` - Value absent or blank
pub fn require_param<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!("{} is required", name))),
    }
}
