//! Fixtures describing a complete bot configuration.
//!
//! - `document::config_document` - Document with every known section populated

pub mod document;
