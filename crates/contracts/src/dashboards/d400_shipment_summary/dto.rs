use crate::shared::lenient::{opt_f64, opt_u32};
use serde::{Deserialize, Serialize};

/// Ответ эндпоинта сводки дашборда.
/// Бэкенд может вернуть не все поля; отсутствующие заполняются нулями.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummaryResponse {
    #[serde(default, deserialize_with = "opt_u32")]
    pub po_today: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32", alias = "poLast7days")]
    pub po_last_7_days: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub pst_total_pending: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub pst_completed: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub psw_total_pending: Option<u32>,
    #[serde(default, deserialize_with = "opt_u32")]
    pub psw_completed: Option<u32>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub total_value_usd: Option<f64>,
}

/// Показатели дашборда по стадиям процесса
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSnapshot {
    pub po_today: u32,
    pub po_last_7_days: u32,
    pub pst_total_pending: u32,
    pub pst_completed: u32,
    pub psw_total_pending: u32,
    pub psw_completed: u32,
    pub total_value_usd: f64,
}

impl From<&DashboardSummaryResponse> for KpiSnapshot {
    fn from(summary: &DashboardSummaryResponse) -> Self {
        Self {
            po_today: summary.po_today.unwrap_or(0),
            po_last_7_days: summary.po_last_7_days.unwrap_or(0),
            pst_total_pending: summary.pst_total_pending.unwrap_or(0),
            pst_completed: summary.pst_completed.unwrap_or(0),
            psw_total_pending: summary.psw_total_pending.unwrap_or(0),
            psw_completed: summary.psw_completed.unwrap_or(0),
            total_value_usd: summary.total_value_usd.unwrap_or(0.0),
        }
    }
}
