use std::collections::HashSet;

/// The user invoking a command, with the roles they hold at call time.
///
/// Built fresh for every interaction and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Discord user id of the caller.
    pub user_id: u64,
    /// Display tag of the caller, used in logs.
    pub tag: String,
    /// Role ids held by the caller in the guild the command was invoked from.
    ///
    /// Empty when the command is invoked outside a guild.
    pub role_ids: HashSet<u64>,
}

impl Principal {
    pub fn new(user_id: u64, tag: impl Into<String>, role_ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            user_id,
            tag: tag.into(),
            role_ids: role_ids.into_iter().collect(),
        }
    }
}
