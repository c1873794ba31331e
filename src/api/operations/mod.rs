// API 操作模块
// 每个接口拆成纯函数（构造 RequestDescriptor）和异步发送两部分

pub mod member;
pub mod passenger;

// 重新导出常用操作
pub use member::MemberApi;
pub use passenger::PassengerApi;
