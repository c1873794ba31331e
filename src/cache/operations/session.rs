use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cache::models::failure::{CacheFailure, CacheOperation};
use crate::cache::storage::{SessionStorage, StorageError};

/// 浏览器在值为 undefined 时写入的字面量
const UNDEFINED_LITERAL: &str = "undefined";

type FailureHook = Arc<dyn Fn(&CacheFailure) + Send + Sync>;

/// 会话缓存操作
///
/// 对调用方永不报错：存储失败会被吞掉，只记录日志并通知可选的诊断钩子。
/// 读取时无法解析为 JSON 的值原样作为字符串返回。
#[derive(Clone)]
pub struct SessionCache {
    storage: Arc<dyn SessionStorage>,
    on_failure: Option<FailureHook>,
}

impl fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCache")
            .field("on_failure", &self.on_failure.is_some())
            .finish_non_exhaustive()
    }
}

impl SessionCache {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage,
            on_failure: None,
        }
    }

    /// 安装诊断钩子，每次被吞掉的失败都会调用
    pub fn with_failure_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&CacheFailure) + Send + Sync + 'static,
    {
        self.on_failure = Some(Arc::new(hook));
        self
    }

    /// 获取缓存
    pub fn get(&self, key: &str) -> Option<Value> {
        let raw = match self.storage.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                self.report(CacheOperation::Get, Some(key), e);
                return None;
            }
        };

        if raw.is_empty() || raw == UNDEFINED_LITERAL {
            return None;
        }

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(_) => Some(Value::String(raw)),
        }
    }

    /// 按类型读取；类型不匹配视为不存在
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                self.report(
                    CacheOperation::Get,
                    Some(key),
                    StorageError::Deserialize(e.to_string()),
                );
                None
            }
        }
    }

    /// 写入缓存（静默失败）
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                self.report(CacheOperation::Set, Some(key), StorageError::Serialize(e.to_string()));
                return;
            }
        };

        if let Err(e) = self.storage.set_item(key, &json) {
            self.report(CacheOperation::Set, Some(key), e);
        }
    }

    /// 删除缓存
    pub fn remove(&self, key: &str) {
        if let Err(e) = self.storage.remove_item(key) {
            self.report(CacheOperation::Remove, Some(key), e);
        }
    }

    /// 清空整个会话存储，不限于本模块写入的键
    pub fn clear_all(&self) {
        if let Err(e) = self.storage.clear() {
            self.report(CacheOperation::ClearAll, None, e);
        }
    }

    fn report(&self, operation: CacheOperation, key: Option<&str>, error: StorageError) {
        tracing::warn!(
            "session cache {} failed for key {:?}: {}",
            operation,
            key,
            error
        );

        if let Some(hook) = &self.on_failure {
            hook(&CacheFailure {
                operation,
                key: key.map(str::to_string),
                error,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::storage::MemoryStorage;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Mutex;

    fn cache() -> (Arc<MemoryStorage>, SessionCache) {
        let storage = Arc::new(MemoryStorage::new());
        (storage.clone(), SessionCache::new(storage))
    }

    /// 所有操作都失败的存储
    struct BrokenStorage;

    impl SessionStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("disabled".into()))
        }
    }

    #[test]
    fn set_then_get_returns_equal_values() {
        let (_, cache) = cache();
        let values = [
            json!({"mobile": "13800001111", "id": 7, "tags": ["a", "b"]}),
            json!("plain text"),
            json!(42),
            json!(false),
            json!(null),
            json!([1, {"nested": true}]),
        ];
        for (i, value) in values.iter().enumerate() {
            let key = format!("k{i}");
            cache.set(&key, value);
            assert_eq!(cache.get(&key).as_ref(), Some(value), "key {key}");
        }
    }

    #[test]
    fn missing_and_removed_keys_are_none() {
        let (_, cache) = cache();
        assert_eq!(cache.get("never"), None);

        cache.set("gone", &json!({"a": 1}));
        cache.remove("gone");
        assert_eq!(cache.get("gone"), None);
    }

    #[test]
    fn unparsable_value_is_returned_raw() {
        let (storage, cache) = cache();
        storage.set_item("raw", "not json {").unwrap();
        assert_eq!(cache.get("raw"), Some(json!("not json {")));
    }

    #[test]
    fn undefined_literal_and_empty_string_are_absent() {
        let (storage, cache) = cache();
        storage.set_item("u", "undefined").unwrap();
        storage.set_item("e", "").unwrap();
        assert_eq!(cache.get("u"), None);
        assert_eq!(cache.get("e"), None);
    }

    #[test]
    fn quota_failure_is_swallowed_and_reported() {
        let failures = Arc::new(Mutex::new(Vec::new()));
        let seen = failures.clone();
        let cache = SessionCache::new(Arc::new(MemoryStorage::with_quota(4)))
            .with_failure_hook(move |f| seen.lock().unwrap().push(f.clone()));

        cache.set("MEMBER", &json!({"mobile": "13800001111"}));

        assert_eq!(cache.get("MEMBER"), None);
        let failures = failures.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].operation, CacheOperation::Set);
        assert_eq!(failures[0].key.as_deref(), Some("MEMBER"));
        assert!(matches!(failures[0].error, StorageError::QuotaExceeded { .. }));
    }

    #[test]
    fn broken_storage_never_panics() {
        let count = Arc::new(Mutex::new(0));
        let counter = count.clone();
        let cache = SessionCache::new(Arc::new(BrokenStorage))
            .with_failure_hook(move |_| *counter.lock().unwrap() += 1);

        cache.set("a", &json!(1));
        assert_eq!(cache.get("a"), None);
        cache.remove("a");
        cache.clear_all();

        assert_eq!(*count.lock().unwrap(), 4);
    }

    #[test]
    fn serialize_failure_is_swallowed() {
        use std::collections::HashMap;

        // 非字符串键的 map 无法序列化为 JSON
        let mut bad = HashMap::new();
        bad.insert((1, 2), "x");

        let (storage, cache) = cache();
        cache.set("bad", &bad);
        assert_eq!(storage.get_item("bad").unwrap(), None);
    }

    #[test]
    fn get_as_typed_read() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Token {
            value: String,
        }

        let (_, cache) = cache();
        cache.set("token", &json!({"value": "abc"}));
        cache.set("wrong", &json!([1, 2]));

        assert_eq!(
            cache.get_as::<Token>("token"),
            Some(Token { value: "abc".into() })
        );
        assert_eq!(cache.get_as::<Token>("wrong"), None);
        assert_eq!(cache.get_as::<Token>("missing"), None);
    }

    #[test]
    fn clear_all_affects_foreign_keys() {
        let (storage, cache) = cache();
        storage.set_item("other-app", "\"x\"").unwrap();
        cache.set("MEMBER", &json!({"mobile": "1"}));

        cache.clear_all();

        assert!(storage.is_empty());
        assert_eq!(cache.get("other-app"), None);
    }
}
