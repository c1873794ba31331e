use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;

/// 经过配置合并后、发出前的请求，出站拦截器可以修改
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// 传输层返回的响应，入站拦截器依次处理
#[derive(Debug, Clone)]
pub struct InboundResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// 响应体；非 JSON 时为字符串，空响应为 null
    pub data: Value,
}

impl InboundResponse {
    pub(crate) fn from_text(status: StatusCode, headers: HeaderMap, text: &str) -> Self {
        let data = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
        };
        Self {
            status,
            headers,
            data,
        }
    }
}
