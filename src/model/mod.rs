//! Domain models shared by the services and the Discord binding.
//!
//! These types are platform-agnostic: ids are plain `u64` snowflakes and no Serenity
//! type appears here. Conversion from gateway payloads happens in `bot::handler`.

pub mod command;
pub mod document;
pub mod event;
pub mod presence;
pub mod principal;
