// 会话状态
// 持有当前会员，初始化时从会话缓存恢复，每次修改都写回缓存

use crate::cache::{SessionCache, keys::MEMBER};
use crate::models::Member;

#[derive(Debug, Clone)]
pub struct SessionStore {
    cache: SessionCache,
    member: Member,
}

impl SessionStore {
    /// 从缓存恢复会员；缓存为空或不是对象时为未登录状态
    pub fn init(cache: SessionCache) -> Self {
        let member = match cache.get(MEMBER) {
            Some(value) => Member::from_value(value).unwrap_or_else(|| {
                tracing::warn!("cached {} is not an object, starting signed out", MEMBER);
                Member::new()
            }),
            None => Member::new(),
        };

        tracing::debug!(
            "session store restored, authenticated: {}",
            !member.is_empty()
        );

        Self { cache, member }
    }

    pub fn member(&self) -> &Member {
        &self.member
    }

    /// 唯一的写入入口：替换当前会员并写回缓存
    pub fn set_member(&mut self, member: Member) {
        self.cache.set(MEMBER, &member);
        self.member = member;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryStorage;
    use serde_json::json;
    use std::sync::Arc;

    fn member(value: serde_json::Value) -> Member {
        Member::from_value(value).unwrap()
    }

    #[test]
    fn starts_empty_without_cache_entry() {
        let store = SessionStore::init(SessionCache::new(Arc::new(MemoryStorage::new())));
        assert!(store.member().is_empty());
    }

    #[test]
    fn set_member_updates_state_and_cache() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
        let mut store = SessionStore::init(cache.clone());

        let m = member(json!({"id": 1, "mobile": "13800001111"}));
        store.set_member(m.clone());

        assert_eq!(store.member(), &m);
        assert_eq!(cache.get(MEMBER), Some(json!({"id": 1, "mobile": "13800001111"})));
    }

    #[test]
    fn restores_from_existing_entry() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
        cache.set(MEMBER, &json!({"mobile": "13900002222"}));

        let store = SessionStore::init(cache);
        assert_eq!(store.member().mobile(), Some("13900002222"));
    }

    #[test]
    fn logout_by_setting_empty_member() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
        let mut store = SessionStore::init(cache.clone());
        store.set_member(member(json!({"mobile": "1"})));

        store.set_member(Member::new());

        assert!(store.member().is_empty());
        assert_eq!(cache.get(MEMBER), Some(json!({})));
    }

    #[test]
    fn non_object_entry_falls_back_to_empty() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
        cache.set(MEMBER, &json!("13800001111"));

        let store = SessionStore::init(cache);
        assert!(store.member().is_empty());
    }

    #[test]
    fn clear_all_resets_next_session() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
        let mut store = SessionStore::init(cache.clone());
        store.set_member(member(json!({"mobile": "13800001111"})));

        cache.clear_all();

        let store = SessionStore::init(cache);
        assert!(store.member().is_empty());
    }

    #[test]
    fn failed_persist_still_updates_memory() {
        let cache = SessionCache::new(Arc::new(MemoryStorage::with_quota(1)));
        let mut store = SessionStore::init(cache.clone());

        store.set_member(member(json!({"mobile": "13800001111"})));

        assert_eq!(store.member().mobile(), Some("13800001111"));
        assert_eq!(cache.get(MEMBER), None);
    }
}
