use contracts::dashboards::d400_shipment_summary::DashboardSummaryResponse;

use super::kpi::SummaryState;
use crate::shared::api_utils::{get_data, ApiResult};
use crate::system::auth::AuthContext;

const API_BASE: &str = "/api/dashboard";

/// Получить сводку дашборда
pub async fn get_dashboard_summary(ctx: &AuthContext) -> ApiResult<DashboardSummaryResponse> {
    get_data(ctx, &format!("{}/summary", API_BASE)).await
}

/// Загрузить сводку; ошибка не пробрасывается, а становится состоянием
pub async fn load_summary(ctx: &AuthContext) -> SummaryState {
    match get_dashboard_summary(ctx).await {
        Ok(summary) => SummaryState::Loaded(summary),
        Err(e) => {
            log::warn!("Dashboard summary unavailable, using local KPIs: {}", e);
            SummaryState::Failed(e.to_string())
        }
    }
}
