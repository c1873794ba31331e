use serde::{Deserialize, Serialize};

/// 发送手机验证码请求
///
/// 图形验证码是否必填由后端策略决定，客户端不做校验。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SendPhoneCaptchaRequest {
    pub phone_number: String,
    pub business_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_captcha_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_captcha_code: Option<String>,
}

impl SendPhoneCaptchaRequest {
    pub fn new(phone_number: impl Into<String>, business_type: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            business_type: business_type.into(),
            ..Default::default()
        }
    }

    /// 附带图形验证码
    pub fn with_graph_captcha(mut self, uuid: impl Into<String>, code: impl Into<String>) -> Self {
        self.graph_captcha_uuid = Some(uuid.into());
        self.graph_captcha_code = Some(code.into());
        self
    }
}

/// 校验手机验证码请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPhoneCaptchaRequest {
    pub phone_number: String,
    pub code: String,
    pub business_type: String,
}

/// 会员注册请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub mobile: String,
}

/// 会员登录请求
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub mobile: String,
}
