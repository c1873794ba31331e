use serde::{Deserialize, Serialize};

/// 保存乘车人请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavePassengerRequest {
    pub name: String,
    /// 身份证号
    pub id_card: String,
    /// 乘客类型
    #[serde(rename = "type")]
    pub passenger_type: String,
}

/// 乘车人列表查询参数
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PassengerListQuery {
    pub member_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PassengerListQuery {
    pub fn new(member_id: i64) -> Self {
        Self {
            member_id,
            page: None,
            size: None,
        }
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}
