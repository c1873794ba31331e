use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::descriptor::RequestDescriptor;
use super::types::{InboundResponse, OutgoingRequest};
use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::{RequestStage, ResponseStage, UnwrapEnvelope};

/// 配置好网关地址、超时和默认请求头的 HTTP 客户端
///
/// 每次调用：出站拦截器 → 网络 → 入站拦截器 → 调用方。
/// 不重试，失败立即返回给调用方。
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Arc<Config>,
    request_stages: Arc<Vec<Box<dyn RequestStage>>>,
    response_stages: Arc<Vec<Box<dyn ResponseStage>>>,
}

pub struct HttpClientBuilder {
    client: Option<reqwest::Client>,
    config: Config,
    request_stages: Vec<Box<dyn RequestStage>>,
    response_stages: Vec<Box<dyn ResponseStage>>,
}

impl HttpClientBuilder {
    /// 使用自定义的 reqwest 客户端
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// 追加出站拦截器
    pub fn request_stage(mut self, stage: impl RequestStage + 'static) -> Self {
        self.request_stages.push(Box::new(stage));
        self
    }

    /// 追加入站拦截器，在解包统一响应之后执行
    pub fn response_stage(mut self, stage: impl ResponseStage + 'static) -> Self {
        self.response_stages.push(Box::new(stage));
        self
    }

    pub fn build(self) -> Result<HttpClient, ApiError> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.config.timeout())
                .build()?,
        };

        Ok(HttpClient {
            client,
            config: Arc::new(self.config),
            request_stages: Arc::new(self.request_stages),
            response_stages: Arc::new(self.response_stages),
        })
    }
}

impl HttpClient {
    pub fn new(config: Config) -> Result<Self, ApiError> {
        Self::builder(config).build()
    }

    /// 默认管道：没有出站拦截器，入站只有 `UnwrapEnvelope`
    pub fn builder(config: Config) -> HttpClientBuilder {
        let unwrap = UnwrapEnvelope::with_business_success_code(config.business_success_code);
        HttpClientBuilder {
            client: None,
            config,
            request_stages: Vec::new(),
            response_stages: vec![Box::new(unwrap)],
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 发送请求，返回入站拦截器处理后的数据
    pub async fn request(&self, descriptor: RequestDescriptor) -> Result<Value, ApiError> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "request",
            %request_id,
            method = %descriptor.method,
            path = %descriptor.path
        );

        async move {
            let mut outcome = match self.prepare(descriptor) {
                Ok(outgoing) => self.dispatch(outgoing).await,
                Err(e) => Err(e),
            };

            for stage in self.response_stages.iter() {
                outcome = match outcome {
                    Ok(response) => stage.on_response(response),
                    Err(e) => Err(stage.on_error(e)),
                };
            }

            match outcome {
                Ok(response) => Ok(response.data),
                Err(e) => {
                    error!("request failed: {}", e);
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// 发送请求并把结果反序列化为 `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let data = self.request(descriptor).await?;
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 合并配置并执行出站拦截器
    fn prepare(&self, descriptor: RequestDescriptor) -> Result<OutgoingRequest, ApiError> {
        let mut url = self.url_for(&descriptor.path)?;
        if !descriptor.query.is_empty() {
            url.query_pairs_mut().extend_pairs(descriptor.query.iter());
        }

        let mut headers = HeaderMap::new();
        let content_type = HeaderValue::from_str(&self.config.content_type)
            .map_err(|e| ApiError::Interceptor(format!("invalid content type: {}", e)))?;
        headers.insert(CONTENT_TYPE, content_type);

        let mut request = OutgoingRequest {
            method: descriptor.method,
            url,
            headers,
            body: descriptor.body,
            timeout: self.config.timeout(),
        };

        for stage in self.request_stages.iter() {
            request = stage.on_request(request)?;
        }

        let body = request
            .body
            .as_ref()
            .map(|body| body.to_string())
            .unwrap_or_default();
        info!(
            "请求参数: {} {} headers={:?} body={}",
            request.method, request.url, request.headers, body
        );
        Ok(request)
    }

    async fn dispatch(&self, request: OutgoingRequest) -> Result<InboundResponse, ApiError> {
        let started = Instant::now();

        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout);
        if let Some(body) = &request.body {
            let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            builder = builder.body(bytes);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await?;

        tracing::debug!("response {} in {:?}", status, started.elapsed());
        Ok(InboundResponse::from_text(status, headers, &text))
    }

    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.config.api_url.trim_end_matches('/');
        let full = if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        };
        Url::parse(&full).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", full, e)))
    }
}
