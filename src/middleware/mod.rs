// 请求/响应拦截器
// 出站拦截器按注册顺序修改请求；入站拦截器按注册顺序处理响应或错误

mod auth;
mod envelope;

pub use auth::BearerAuth;
pub use envelope::UnwrapEnvelope;

use crate::error::ApiError;
use crate::request::{InboundResponse, OutgoingRequest};

/// 出站拦截器
pub trait RequestStage: Send + Sync {
    /// 返回错误时本次调用失败，错误继续交给入站拦截器的 `on_error`
    fn on_request(&self, request: OutgoingRequest) -> Result<OutgoingRequest, ApiError>;
}

/// 入站拦截器
pub trait ResponseStage: Send + Sync {
    fn on_response(&self, response: InboundResponse) -> Result<InboundResponse, ApiError>;

    fn on_error(&self, error: ApiError) -> ApiError {
        error
    }
}

impl<F> RequestStage for F
where
    F: Fn(OutgoingRequest) -> Result<OutgoingRequest, ApiError> + Send + Sync,
{
    fn on_request(&self, request: OutgoingRequest) -> Result<OutgoingRequest, ApiError> {
        self(request)
    }
}
