use reqwest::StatusCode;
use serde_json::Value;
use tracing::{error, warn};

use super::ResponseStage;
use crate::common::{ApiResult, message_of, raw_code_of};
use crate::error::{ApiError, DEFAULT_ERROR_MESSAGE};
use crate::request::InboundResponse;

/// 默认入站拦截器：解包统一响应结构
///
/// 只有传输层状态码为 200 才算成功，成功时把 `data` 作为结果；
/// 其他状态码按响应体中的 message 报错。默认不看响应体里的业务状态码，
/// 设置了业务成功码后，200 响应中 code 不一致的也按错误处理。
#[derive(Debug, Clone, Default)]
pub struct UnwrapEnvelope {
    business_success_code: Option<i64>,
}

impl UnwrapEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_business_success_code(code: Option<i64>) -> Self {
        Self {
            business_success_code: code,
        }
    }
}

impl ResponseStage for UnwrapEnvelope {
    fn on_response(&self, mut response: InboundResponse) -> Result<InboundResponse, ApiError> {
        if response.status != StatusCode::OK {
            let message =
                message_of(&response.data).unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            error!("响应错误: {}", message);
            return Err(ApiError::Status {
                status: response.status.as_u16(),
                message,
            });
        }

        // 不是统一响应结构时原样返回
        let Some(envelope) = ApiResult::<Value>::from_body(&response.data) else {
            return Ok(response);
        };

        if let Some(expected) = self.business_success_code {
            match envelope.code {
                Some(code) if code != expected => {
                    let message = envelope
                        .message
                        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
                    error!("业务错误: {} {}", code, message);
                    return Err(ApiError::Business { code, message });
                }
                Some(_) => {}
                None => {
                    if let Some(raw) = raw_code_of(&response.data) {
                        warn!("业务状态码无法识别, 跳过检查: {}", raw);
                    }
                }
            }
        }

        response.data = envelope.data;
        Ok(response)
    }

    fn on_error(&self, error: ApiError) -> ApiError {
        error!("网络错误: {}", error);
        error
    }
}
