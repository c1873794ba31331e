/// 缓存操作
/// 提供缓存操作的功能实现

// 会话缓存操作
pub mod session;

pub use session::SessionCache;
