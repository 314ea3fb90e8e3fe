use contracts::domain::a003_reference::{Country, ServiceProvider};

use crate::shared::api_utils::{get_data, ApiResult};
use crate::system::auth::AuthContext;

pub async fn fetch_countries(ctx: &AuthContext) -> ApiResult<Vec<Country>> {
    get_data(ctx, "/api/reference/countries").await
}

/// Брокеры и перевозчики для формы PSW
pub async fn fetch_service_providers(ctx: &AuthContext) -> ApiResult<Vec<ServiceProvider>> {
    get_data(ctx, "/api/reference/service-providers").await
}
