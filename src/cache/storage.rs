use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("存储空间不足: 需要 {required} 字节, 上限 {quota} 字节")]
    QuotaExceeded { required: usize, quota: usize },
    #[error("序列化错误: {0}")]
    Serialize(String),
    #[error("反序列化错误: {0}")]
    Deserialize(String),
    #[error("存储不可用: {0}")]
    Unavailable(String),
}

/// 会话级存储后端
///
/// 语义与浏览器的 sessionStorage 一致：字符串键值，生命周期与会话相同，
/// 同一作用域内的所有代码共享，后写覆盖先写。
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// 清空整个作用域，包括不是本进程写入的键
    fn clear(&self) -> Result<(), StorageError>;
}

/// 进程内存储，进程退出即失效
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
    /// 键和值的总字节数上限
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }

    /// 条目数；锁被污染时仍读取其中的数据
    pub fn len(&self) -> usize {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.items
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.lock()?;

        if let Some(quota) = self.quota {
            // 替换已有键时先扣除旧值占用
            let used: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let required = used + key.len() + value.len();
            if required > quota {
                return Err(StorageError::QuotaExceeded { required, quota });
            }
        }

        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.lock()?.clear();
        Ok(())
    }
}
