//! Vigil Test Utils
//!
//! Provides shared testing utilities for the vigil bot. This crate offers a builder
//! pattern for creating test contexts backed by a temporary configuration document,
//! fixtures describing a complete document, and factories for Serenity objects.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring the document written to disk
//! - **TestContext**: Test environment owning the temporary directory and document path
//! - **fixture**: The default configuration document and the ids it uses
//! - **serenity**: Factories for Serenity `User` and `Member` structs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_store() {
//!     let test = TestBuilder::new()
//!         .without_section("channels.join_log")
//!         .build()
//!         .unwrap();
//!
//!     let store = ConfigStore::load(&test.config_path, serde_json::json!({})).await.unwrap();
//!     // Exercise the store...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
pub mod serenity;
