use std::env;
use std::time::Duration;

use thiserror::Error;

/// 默认请求超时时间（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// 默认请求头 Content-Type
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// 后端网关地址
    pub api_url: String,
    /// 运行环境名称，仅用于日志
    pub app_env: String,
    pub timeout_ms: u64,
    pub content_type: String,
    /// 业务成功码；为空时不检查响应体中的业务状态
    pub business_success_code: Option<i64>,
}

impl Config {
    pub fn new(api_url: impl Into<String>) -> Self {
        Config {
            api_url: api_url.into(),
            app_env: "development".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            business_success_code: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 从任意键值来源读取配置，`from_env` 和测试共用
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("API_URL"))?;

        let mut config = Config::new(api_url);

        if let Some(app_env) = lookup("APP_ENV") {
            config.app_env = app_env;
        }

        if let Some(raw) = lookup("API_TIMEOUT_MS") {
            config.timeout_ms = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "API_TIMEOUT_MS",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("API_SUCCESS_CODE") {
            let code = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "API_SUCCESS_CODE",
                value: raw.clone(),
            })?;
            config.business_success_code = Some(code);
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_business_success_code(mut self, code: i64) -> Self {
        self.business_success_code = Some(code);
        self
    }
}
