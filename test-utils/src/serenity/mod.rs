//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Member) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's gateway would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_user};
//!
//! #[test]
//! fn test_member_conversion() {
//!     let member = create_test_member(1, "ana", 100, &[300]);
//!     let user = create_test_user(2, "bo");
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use user::create_test_user;
