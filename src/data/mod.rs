//! Persistence layer.
//!
//! The bot keeps all durable state in a single JSON document. `ConfigStore` owns that
//! document and is the only code that touches the file.

pub mod config_store;

pub use config_store::ConfigStore;

#[cfg(test)]
mod test;
