use crate::data::config_store::ConfigStore;
use crate::error::config::ConfigError;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, fixture};

mod concurrent;
mod get;
mod load;
mod update_and_persist;
