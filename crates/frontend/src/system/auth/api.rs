use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use super::context::AuthContext;
use crate::shared::api_utils::{get_one, post_public, ApiResult};

/// Login with username and password
pub async fn login(
    ctx: &AuthContext,
    username: String,
    password: String,
) -> ApiResult<LoginResponse> {
    let request = LoginRequest { username, password };
    post_public(ctx, "/api/auth/login", &request).await
}

/// Get current user info
pub async fn get_current_user(ctx: &AuthContext) -> ApiResult<UserInfo> {
    ctx.require_token()?;
    get_one(ctx, "/api/auth/me").await
}
