use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected data or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A Discord snowflake id of `0`, which Discord never assigns
    #[error("Invalid Discord ID '{0}': IDs must be non-zero")]
    ZeroId(String),

    /// A command handler panicked while executing.
    #[error("Command '{0}' panicked during execution")]
    HandlerPanicked(String),
}
