use thiserror::Error;

/// 默认错误消息，响应体中没有 message 时使用
pub const DEFAULT_ERROR_MESSAGE: &str = "Error";

/// 请求管道对调用方暴露的错误
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// 传输层状态码不是 200
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("请求超时: {0}")]
    Timeout(String),
    /// 网络错误（连接失败等）
    #[error("网络错误: {0}")]
    Transport(String),
    #[error("无效的请求地址: {0}")]
    InvalidUrl(String),
    /// 拦截器内部错误
    #[error("拦截器错误: {0}")]
    Interceptor(String),
    /// 200 响应中携带的业务错误，仅在配置了业务成功码时出现
    #[error("业务错误 {code}: {message}")]
    Business { code: i64, message: String },
    #[error("响应解析失败: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
