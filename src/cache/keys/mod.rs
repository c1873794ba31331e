// 缓存键

/// 当前会员信息
pub const MEMBER: &str = "MEMBER";

/// 访问令牌，供 `BearerAuth` 读取
pub const ACCESS_TOKEN: &str = "access_token";
