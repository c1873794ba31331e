// 缓存模块
// 会话级键值缓存：存储后端 + JSON 序列化 + 静默失败

pub mod keys;
pub mod models;
pub mod operations;
pub mod storage;

// 重新导出常用类型，方便其他模块使用
pub use models::failure::{CacheFailure, CacheOperation};
pub use operations::session::SessionCache;
pub use storage::{MemoryStorage, SessionStorage, StorageError};
