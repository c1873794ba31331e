use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::RequestStage;
use crate::cache::{SessionCache, keys::ACCESS_TOKEN};
use crate::error::ApiError;
use crate::request::OutgoingRequest;

/// 从会话缓存读取令牌并加到 Authorization 请求头
///
/// 默认管道不安装，需要时通过 `HttpClientBuilder::request_stage` 加入。
#[derive(Debug, Clone)]
pub struct BearerAuth {
    cache: SessionCache,
    key: String,
}

impl BearerAuth {
    pub fn new(cache: SessionCache) -> Self {
        Self::with_key(cache, ACCESS_TOKEN)
    }

    pub fn with_key(cache: SessionCache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
        }
    }
}

impl RequestStage for BearerAuth {
    fn on_request(&self, mut request: OutgoingRequest) -> Result<OutgoingRequest, ApiError> {
        let Some(token) = self.cache.get_as::<String>(&self.key) else {
            return Ok(request);
        };
        if token.is_empty() {
            return Ok(request);
        }

        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::Interceptor(format!("invalid token: {}", e)))?;
        request.headers.insert(AUTHORIZATION, value);
        Ok(request)
    }
}
