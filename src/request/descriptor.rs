use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// 一次请求的描述：方法、路径、请求体或查询参数
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// 相对于网关地址的路径，路径参数已经替换好
    pub path: String,
    pub body: Option<Value>,
    pub query: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 序列化请求体，字段顺序与结构体定义一致
    pub fn json<T: Serialize + ?Sized>(self, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(self.with_body(body))
    }

    /// 把结构体展开为查询参数；null 字段跳过
    pub fn query<T: Serialize + ?Sized>(mut self, params: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(params).map_err(|e| ApiError::Decode(e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(ApiError::Decode("query parameters must be an object".into()));
        };

        for (name, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.query.push((name, value));
        }
        Ok(self)
    }
}
