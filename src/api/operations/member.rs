// 会员相关接口：图形验证码、手机验证码、注册、登录

use serde_json::Value;

use crate::api::models::member::{
    LoginRequest, RegisterRequest, SendPhoneCaptchaRequest, VerifyPhoneCaptchaRequest,
};
use crate::error::ApiError;
use crate::request::{HttpClient, RequestDescriptor};

const GRAPH_CAPTCHA: &str = "/member/captcha/graph";
const NEED_GRAPH_CAPTCHA: &str = "/member/captcha/need-graph";
const PHONE_CAPTCHA: &str = "/member/captcha/phone";
const VERIFY_PHONE_CAPTCHA: &str = "/member/captcha/verify-phone";
const REGISTER: &str = "/member/member/register";
const LOGIN: &str = "/member/member/login";

/// 会员接口
pub struct MemberApi;

impl MemberApi {
    pub fn graph_captcha_request() -> RequestDescriptor {
        RequestDescriptor::get(GRAPH_CAPTCHA)
    }

    pub fn need_graph_captcha_request() -> RequestDescriptor {
        RequestDescriptor::get(NEED_GRAPH_CAPTCHA)
    }

    pub fn send_phone_captcha_request(
        req: &SendPhoneCaptchaRequest,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::post(PHONE_CAPTCHA).json(req)
    }

    pub fn verify_phone_captcha_request(
        req: &VerifyPhoneCaptchaRequest,
    ) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::post(VERIFY_PHONE_CAPTCHA).json(req)
    }

    pub fn register_request(req: &RegisterRequest) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::post(REGISTER).json(req)
    }

    pub fn login_request(req: &LoginRequest) -> Result<RequestDescriptor, ApiError> {
        RequestDescriptor::post(LOGIN).json(req)
    }

    /// 获取图形验证码
    pub async fn get_graph_captcha(client: &HttpClient) -> Result<Value, ApiError> {
        client.request(Self::graph_captcha_request()).await
    }

    /// 检查是否需要图形验证码
    pub async fn need_graph_captcha(client: &HttpClient) -> Result<Value, ApiError> {
        client.request(Self::need_graph_captcha_request()).await
    }

    /// 发送手机验证码
    pub async fn send_phone_captcha(
        client: &HttpClient,
        req: &SendPhoneCaptchaRequest,
    ) -> Result<Value, ApiError> {
        tracing::debug!("发送手机验证码: {} ({})", req.phone_number, req.business_type);
        client.request(Self::send_phone_captcha_request(req)?).await
    }

    /// 验证手机验证码
    pub async fn verify_phone_captcha(
        client: &HttpClient,
        req: &VerifyPhoneCaptchaRequest,
    ) -> Result<Value, ApiError> {
        client.request(Self::verify_phone_captcha_request(req)?).await
    }

    /// 用户注册
    pub async fn register(client: &HttpClient, req: &RegisterRequest) -> Result<Value, ApiError> {
        client.request(Self::register_request(req)?).await
    }

    /// 用户登录
    pub async fn login(client: &HttpClient, req: &LoginRequest) -> Result<Value, ApiError> {
        client.request(Self::login_request(req)?).await
    }
}
