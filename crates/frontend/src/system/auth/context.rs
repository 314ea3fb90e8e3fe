use contracts::system::auth::UserInfo;

use super::{api, storage};
use crate::shared::api_utils::{ApiError, ApiResult};
use crate::shared::config::AppConfig;

/// Контекст вызова API: конфигурация и (необязательный) токен.
///
/// Передаётся в каждую функцию API явно; сервисы сами хранилище не читают.
/// Без токена работают только чтения, изменения блокируются.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    config: AppConfig,
    access_token: Option<String>,
    user_info: Option<UserInfo>,
}

impl AuthContext {
    pub fn new(config: AppConfig, access_token: Option<String>) -> Self {
        Self {
            config,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            user_info: None,
        }
    }

    pub fn anonymous(config: AppConfig) -> Self {
        Self::new(config, None)
    }

    /// Restore the session persisted by a previous login
    pub fn from_storage(config: AppConfig) -> Self {
        let token = storage::get_access_token();
        log::debug!("Session restored: authenticated={}", token.is_some());
        Self::new(config, token)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.access_token().map(|t| format!("Bearer {}", t))
    }

    /// Token for a mutating call; its absence blocks the action
    pub fn require_token(&self) -> ApiResult<&str> {
        self.access_token().ok_or(ApiError::Unauthenticated)
    }

    pub fn with_session(mut self, access_token: String, user_info: Option<UserInfo>) -> Self {
        self.access_token = Some(access_token).filter(|t| !t.trim().is_empty());
        self.user_info = user_info;
        self
    }

    pub fn signed_out(mut self) -> Self {
        self.access_token = None;
        self.user_info = None;
        self
    }
}

/// Helper: Perform login and persist the token
pub async fn do_login(
    ctx: &AuthContext,
    username: String,
    password: String,
) -> ApiResult<AuthContext> {
    let response = api::login(ctx, username, password).await?;
    storage::save_access_token(&response.access_token);
    log::info!("Signed in");
    Ok(ctx.clone().with_session(response.access_token, response.user))
}

/// Helper: Perform logout
pub fn do_logout(ctx: &AuthContext) -> AuthContext {
    storage::clear_tokens();
    log::info!("Signed out");
    ctx.clone().signed_out()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_context_blocks_mutations() {
        let ctx = AuthContext::anonymous(AppConfig::default());
        assert!(!ctx.is_authenticated());
        assert_eq!(ctx.bearer_header(), None);
        assert_eq!(ctx.require_token(), Err(ApiError::Unauthenticated));
    }

    #[test]
    fn test_blank_token_is_absent() {
        let ctx = AuthContext::new(AppConfig::default(), Some("  ".to_string()));
        assert!(!ctx.is_authenticated());
    }

    #[test]
    fn test_session_lifecycle() {
        let ctx = AuthContext::anonymous(AppConfig::default()).with_session("abc".to_string(), None);
        assert_eq!(ctx.bearer_header().as_deref(), Some("Bearer abc"));
        assert_eq!(ctx.require_token(), Ok("abc"));
        assert!(!ctx.signed_out().is_authenticated());
    }
}
