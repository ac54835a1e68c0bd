use serde_json::Value;
use std::collections::HashSet;

use crate::data::ConfigStore;
use crate::model::{document::path, principal::Principal};
use crate::util::parse::parse_snowflake;

/// Returns true iff the caller holds at least one allow-listed role.
///
/// An empty allow-list authorizes nobody.
pub fn is_authorized(allowed: &HashSet<u64>, held: &HashSet<u64>) -> bool {
    !allowed.is_disjoint(held)
}

/// Role allow-list check for privileged commands.
pub struct PermissionGate<'a> {
    store: &'a ConfigStore,
}

impl<'a> PermissionGate<'a> {
    pub fn new(store: &'a ConfigStore) -> Self {
        Self { store }
    }

    /// Reads `permissions.allowed_role_ids` from the store.
    ///
    /// Entries may be strings or numbers. Entries that are not valid ids are logged and
    /// ignored; a missing or non-array section yields an empty allow-list.
    pub async fn allowed_roles(&self) -> HashSet<u64> {
        let Some(value) = self.store.get(path::ALLOWED_ROLE_IDS).await else {
            tracing::warn!(
                "'{}' is not configured; privileged commands are disabled",
                path::ALLOWED_ROLE_IDS
            );
            return HashSet::new();
        };

        let Value::Array(entries) = value else {
            tracing::warn!("'{}' is not an array; ignoring it", path::ALLOWED_ROLE_IDS);
            return HashSet::new();
        };

        entries
            .iter()
            .filter_map(|entry| match parse_snowflake(Some(entry)) {
                Ok(id) => id,
                Err(e) => {
                    tracing::warn!("Ignoring invalid allowed role id {}: {}", entry, e);
                    None
                }
            })
            .collect()
    }

    /// Checks the principal against the allow-list as currently configured.
    pub async fn authorize(&self, principal: &Principal) -> bool {
        let allowed = self.allowed_roles().await;
        is_authorized(&allowed, &principal.role_ids)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_utils::{builder::TestBuilder, fixture};

    use super::*;
    use crate::util::parse::parse_u64_from_string;

    fn set(ids: &[u64]) -> HashSet<u64> {
        ids.iter().copied().collect()
    }

    #[test]
    fn authorizes_on_any_shared_role() {
        assert!(is_authorized(&set(&[1, 2]), &set(&[2, 3])));
        assert!(!is_authorized(&set(&[1, 2]), &set(&[3, 4])));
    }

    /// Tests the fail-closed behaviour of an empty allow-list.
    ///
    /// Expected: false even for callers holding roles
    #[test]
    fn empty_allow_list_denies_everyone() {
        assert!(!is_authorized(&set(&[]), &set(&[1, 2, 3])));
        assert!(!is_authorized(&set(&[]), &set(&[])));
    }

    /// Tests reading a mixed allow-list from the store.
    ///
    /// Expected: string and number ids accepted, garbage dropped
    #[tokio::test]
    async fn reads_mixed_allow_list() {
        let test = TestBuilder::new()
            .with_section(
                path::ALLOWED_ROLE_IDS,
                json!(["300000000000000001", 42, "not-a-role", ""]),
            )
            .build()
            .unwrap();
        let store = ConfigStore::load(&test.config_path, json!({})).await.unwrap();

        let allowed = PermissionGate::new(&store).allowed_roles().await;

        assert_eq!(allowed, set(&[300000000000000001, 42]));
    }

    /// Tests that the gate sees allow-list changes without a reload.
    ///
    /// Expected: denied before the update, authorized after
    #[tokio::test]
    async fn rereads_allow_list_on_every_call() {
        let test = TestBuilder::new()
            .with_section(path::ALLOWED_ROLE_IDS, json!([]))
            .build()
            .unwrap();
        let store = ConfigStore::load(&test.config_path, json!({})).await.unwrap();
        let role = parse_u64_from_string(fixture::document::ALLOWED_ROLE_ID).unwrap();
        let principal = Principal::new(1, "ana", [role]);
        let gate = PermissionGate::new(&store);

        assert!(!gate.authorize(&principal).await);

        store
            .update_and_persist(path::ALLOWED_ROLE_IDS, json!([fixture::document::ALLOWED_ROLE_ID]))
            .await
            .unwrap();

        assert!(gate.authorize(&principal).await);
    }

    #[tokio::test]
    async fn missing_allow_list_denies() {
        let test = TestBuilder::new()
            .without_section("permissions")
            .build()
            .unwrap();
        let store = ConfigStore::load(&test.config_path, json!({})).await.unwrap();

        let principal = Principal::new(1, "ana", [1, 2, 3]);

        assert!(!PermissionGate::new(&store).authorize(&principal).await);
    }
}
