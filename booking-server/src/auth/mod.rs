//! 认证模块
//!
//! 校验外部认证服务签发的 JWT 令牌并提供角色检查中间件。
//! 令牌的签发（登录/注册）由外部认证服务负责，本服务只做校验。

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_employee};
