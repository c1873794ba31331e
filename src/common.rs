use serde::{Deserialize, Serialize};
use serde_json::Value;

// 后端统一响应结构 { data, message, code }
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiResult<T = Value> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

impl ApiResult<Value> {
    /// 按字段读取统一响应结构；不是对象或缺少 data 字段时返回 None
    ///
    /// 状态码取 code，没有时取 status，数字和数字字符串都可以；
    /// 其他形式的状态码视为没有。message 不是字符串时视为没有。
    pub fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let data = object.get("data")?.clone();

        Some(Self {
            code: code_of(body),
            message: message_of(body),
            data,
        })
    }
}

/// 从响应体中提取 message 字段
pub(crate) fn message_of(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// 原始状态码字段，先 code 后 status
pub(crate) fn raw_code_of(body: &Value) -> Option<&Value> {
    body.get("code")
        .filter(|v| !v.is_null())
        .or_else(|| body.get("status").filter(|v| !v.is_null()))
}

/// 从响应体中提取业务状态码
pub(crate) fn code_of(body: &Value) -> Option<i64> {
    match raw_code_of(body)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
