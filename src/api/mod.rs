// 后端接口封装
// models: 请求数据结构；operations: 构造请求并通过 HttpClient 发送

pub mod models;
pub mod operations;

pub use operations::{MemberApi, PassengerApi};
