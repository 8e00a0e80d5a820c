//! Branch profile store (分店资料)
//!
//! The profile is a singleton; updates merge field-by-field the way the
//! settings form submits them.

use parking_lot::RwLock;
use shared::models::{BranchInfo, BranchInfoUpdate};
use shared::util::now_millis;
use tracing::info;

pub struct BranchStore {
    info: RwLock<BranchInfo>,
}

impl std::fmt::Debug for BranchStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchStore")
            .field("name", &self.info.read().name)
            .finish()
    }
}

impl Default for BranchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchStore {
    /// Empty profile; seeded at startup when demo data is enabled.
    pub fn new() -> Self {
        Self {
            info: RwLock::new(BranchInfo::default()),
        }
    }

    pub fn with_info(info: BranchInfo) -> Self {
        Self {
            info: RwLock::new(info),
        }
    }

    /// Current profile (detached copy).
    pub fn info(&self) -> BranchInfo {
        self.info.read().clone()
    }

    /// Merge `update` into the profile and stamp the update time.
    pub fn update(&self, update: BranchInfoUpdate) -> BranchInfo {
        let mut current = self.info.write();
        update.apply_to(&mut current);
        current.updated_at = Some(now_millis());
        info!(branch = %current.name, "Branch info updated");
        current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::demo_branch;

    #[test]
    fn test_update_merges_and_stamps() {
        let store = BranchStore::with_info(demo_branch());

        let updated = store.update(BranchInfoUpdate {
            total_staff: Some(18),
            ..BranchInfoUpdate::default()
        });

        assert_eq!(updated.total_staff, 18);
        assert_eq!(updated.name, "Downtown Branch");
        assert!(updated.updated_at.is_some());

        // The store holds the merged profile, not just the return value.
        assert_eq!(store.info().total_staff, 18);
    }

    #[test]
    fn test_info_is_detached() {
        let store = BranchStore::with_info(demo_branch());

        let mut copy = store.info();
        copy.name = "Elsewhere".to_string();

        assert_eq!(store.info().name, "Downtown Branch");
    }
}
