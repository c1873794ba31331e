use std::sync::Arc;

use member_client::{
    HttpClient, SessionStore,
    api::MemberApi,
    cache::{MemoryStorage, SessionCache},
    config::Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("环境：{}", config.app_env);
    tracing::info!("服务器地址：{}", config.api_url);

    // 会话缓存与会员状态
    let cache = SessionCache::new(Arc::new(MemoryStorage::new()));
    let store = SessionStore::init(cache);
    match store.member().mobile() {
        Some(mobile) => tracing::info!("已登录会员: {}", mobile),
        None => tracing::info!("未登录"),
    }

    let client = HttpClient::new(config).expect("Failed to build HTTP client");

    // 连通性检查
    match MemberApi::need_graph_captcha(&client).await {
        Ok(need) => tracing::info!("need graph captcha: {}", need),
        Err(e) => tracing::warn!("gateway check failed: {}", e),
    }
}
