// API 数据传输对象模块
// 包含所有发送给后端的请求结构

pub mod member;
pub mod passenger;

// 重新导出常用类型
pub use member::*;
pub use passenger::*;
