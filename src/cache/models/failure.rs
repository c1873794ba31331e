use std::fmt;

use crate::cache::storage::StorageError;

/// 发生失败的缓存操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    Get,
    Set,
    Remove,
    ClearAll,
}

impl fmt::Display for CacheOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheOperation::Get => "get",
            CacheOperation::Set => "set",
            CacheOperation::Remove => "remove",
            CacheOperation::ClearAll => "clear_all",
        };
        f.write_str(name)
    }
}

/// 被缓存层吞掉的一次失败，交给诊断钩子
#[derive(Debug, Clone)]
pub struct CacheFailure {
    pub operation: CacheOperation,
    /// clear_all 没有键
    pub key: Option<String>,
    pub error: StorageError,
}
