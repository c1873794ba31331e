use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 当前登录会员
///
/// 不约束字段结构，只要求是 JSON 对象；常用字段提供读取方法。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Member(Map<String, Value>);

impl Member {
    pub fn new() -> Self {
        Self::default()
    }

    /// 把任意 JSON 值解释为会员；不是对象时返回 None
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// 空记录表示未登录
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn mobile(&self) -> Option<&str> {
        self.0.get("mobile").and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Member {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Member> for Value {
    fn from(member: Member) -> Self {
        Value::Object(member.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_objects_are_members() {
        let member = Member::from_value(json!({"id": 3, "mobile": "13800001111"})).unwrap();
        assert_eq!(member.mobile(), Some("13800001111"));
        assert_eq!(member.id(), Some(3));
        assert!(Member::from_value(json!("13800001111")).is_none());
        assert!(Member::from_value(json!(null)).is_none());
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut member = Member::new();
        member.insert("mobile", "13800001111");
        member.insert("token", "t-1");
        assert_eq!(
            serde_json::to_string(&member).unwrap(),
            r#"{"mobile":"13800001111","token":"t-1"}"#
        );
    }
}
