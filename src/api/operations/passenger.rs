// 乘车人接口

use serde_json::Value;

use crate::api::models::passenger::{PassengerListQuery, SavePassengerRequest};
use crate::error::ApiError;
use crate::request::{HttpClient, RequestDescriptor};

const SAVE: &str = "/member/passenger/save";
// 分页参数走查询字符串
const LIST: &str = "/member/passenger/list";

pub struct PassengerApi;

impl PassengerApi {
    pub fn save_request(req: &SavePassengerRequest) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::post(SAVE).json(req)
    }

    pub fn list_request(query: &PassengerListQuery) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::get(LIST).query(query)
    }

    /// 保存乘车人
    pub async fn save(client: &HttpClient, req: &SavePassengerRequest) -> Result<Value, ApiError> {
        client.request(Self::save_request(req)?).await
    }

    /// 查询乘车人列表
    pub async fn list(client: &HttpClient, query: &PassengerListQuery) -> Result<Value, ApiError> {
        client.request(Self::list_request(query)?).await
    }
}
