use serde_json::Value;

use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from a string slice
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed string to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}

/// Reads a Discord snowflake id stored in the configuration document.
///
/// Ids are normally stored as strings, but bare JSON numbers are accepted too.
/// Empty strings and `null` are treated as "not configured". `0` is rejected since
/// serenity's id types cannot hold it.
///
/// # Returns
/// - `Ok(None)` - The value is absent, null or an empty string
/// - `Ok(Some(id))` - The value holds a valid id
/// - `Err(AppError)` - The value is present but is not a valid id
pub fn parse_snowflake(value: Option<&Value>) -> Result<Option<u64>, AppError> {
    let id = match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => parse_u64_from_string(s).map(Some),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(id) => Ok(Some(id)),
            None => parse_u64_from_string(&n.to_string()).map(Some),
        },
        Some(other) => parse_u64_from_string(&other.to_string()).map(Some),
    }?;

    match id {
        Some(0) => Err(InternalError::ZeroId("0".to_string()).into()),
        id => Ok(id),
    }
}
