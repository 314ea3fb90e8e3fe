//! Показатели дашборда по стадиям процесса.
//!
//! Источник — эндпоинт сводки; пока он грузится или упал, показатели
//! считаются локально по полному списку. Ошибок здесь не бывает:
//! пустой или битый вход даёт нули.

use chrono::NaiveDate;
use contracts::dashboards::d400_shipment_summary::{DashboardSummaryResponse, KpiSnapshot};
use contracts::domain::a001_shipment::ShipmentRecord;

use crate::shared::date_utils::{date_range, DateFilterMode};

/// Состояние загрузки сводки
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SummaryState {
    #[default]
    Loading,
    Loaded(DashboardSummaryResponse),
    Failed(String),
}

fn count(records: &[ShipmentRecord], predicate: impl Fn(&ShipmentRecord) -> bool) -> u32 {
    records.iter().filter(|r| predicate(r)).count() as u32
}

/// Локальный расчёт показателей по списку записей
pub fn aggregate(records: &[ShipmentRecord], today: NaiveDate) -> KpiSnapshot {
    let today_range = date_range(&DateFilterMode::Today, today);
    let week_range = date_range(&DateFilterMode::Last7Days, today);

    let pst_completed = count(records, ShipmentRecord::pst_done);
    let psw_completed = count(records, ShipmentRecord::psw_done);
    let total = records.len() as u32;

    KpiSnapshot {
        po_today: count(records, |r| r.po_date.is_some() && today_range.contains(r.po_date)),
        po_last_7_days: count(records, |r| r.po_date.is_some() && week_range.contains(r.po_date)),
        pst_total_pending: total - pst_completed,
        pst_completed,
        psw_total_pending: total - psw_completed,
        psw_completed,
        total_value_usd: records
            .iter()
            .map(|r| r.total_value)
            .filter(|v| v.is_finite())
            .sum(),
    }
}

/// Показатели для отображения: данные сводки, если она загружена,
/// иначе локальный расчёт по полному (нефильтрованному) списку
pub fn resolve_kpi(
    summary: &SummaryState,
    records: &[ShipmentRecord],
    today: NaiveDate,
) -> KpiSnapshot {
    match summary {
        SummaryState::Loaded(response) => KpiSnapshot::from(response),
        SummaryState::Loading | SummaryState::Failed(_) => aggregate(records, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn records() -> Vec<ShipmentRecord> {
        vec![
            ShipmentRecord {
                po_date: Some(d(2025, 7, 14)),
                pst_status: Some("Y".to_string()),
                psw_status: Some("Y".to_string()),
                total_value: 100.0,
                ..Default::default()
            },
            ShipmentRecord {
                po_date: Some(d(2025, 7, 10)),
                pst_status: Some("Y".to_string()),
                psw_status: None,
                total_value: 50.5,
                ..Default::default()
            },
            ShipmentRecord {
                po_date: Some(d(2025, 6, 1)),
                pst_status: Some("N".to_string()),
                total_value: f64::NAN,
                ..Default::default()
            },
            ShipmentRecord::default(),
        ]
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(aggregate(&[], d(2025, 7, 14)), KpiSnapshot::default());
    }

    #[test]
    fn test_aggregate_buckets() {
        let kpi = aggregate(&records(), d(2025, 7, 14));
        assert_eq!(kpi.po_today, 1);
        assert_eq!(kpi.po_last_7_days, 2);
        assert_eq!(kpi.pst_completed, 2);
        assert_eq!(kpi.pst_total_pending, 2);
        assert_eq!(kpi.psw_completed, 1);
        assert_eq!(kpi.psw_total_pending, 3);
        assert_eq!(kpi.total_value_usd, 150.5);
    }

    #[test]
    fn test_pst_done_psw_absent_is_psw_pending() {
        let record = ShipmentRecord {
            pst_status: Some("Y".to_string()),
            psw_status: None,
            ..Default::default()
        };
        let kpi = aggregate(&[record], d(2025, 7, 14));
        assert_eq!(kpi.psw_total_pending, 1);
        assert_eq!(kpi.psw_completed, 0);
    }

    #[test]
    fn test_live_summary_preferred_and_gaps_zero() {
        let summary = SummaryState::Loaded(DashboardSummaryResponse {
            po_today: Some(42),
            ..Default::default()
        });
        let kpi = resolve_kpi(&summary, &records(), d(2025, 7, 14));
        assert_eq!(kpi.po_today, 42);
        assert_eq!(kpi.pst_completed, 0);
        assert_eq!(kpi.total_value_usd, 0.0);
    }

    #[test]
    fn test_fallback_to_local_while_loading_or_failed() {
        let local = aggregate(&records(), d(2025, 7, 14));
        assert_eq!(
            resolve_kpi(&SummaryState::Loading, &records(), d(2025, 7, 14)),
            local
        );
        assert_eq!(
            resolve_kpi(&SummaryState::Failed("HTTP 502".to_string()), &records(), d(2025, 7, 14)),
            local
        );
        assert_eq!(
            resolve_kpi(&SummaryState::Failed("offline".to_string()), &[], d(2025, 7, 14)),
            KpiSnapshot::default()
        );
    }

    #[test]
    fn test_partial_rows_from_presentation_layer() {
        use crate::domain::a001_shipment::{filter_shipments, ShipmentFilter};

        let rows: Vec<ShipmentRecord> =
            serde_json::from_str(r#"[{"poNumber": "X"}, {"poNumber": "Y", "totalValue": null}]"#)
                .unwrap();
        let visible = filter_shipments(&rows, &ShipmentFilter::default(), d(2025, 7, 14));
        assert_eq!(visible.len(), 2);

        let kpi = aggregate(&rows, d(2025, 7, 14));
        assert_eq!(kpi.po_today, 0);
        assert_eq!(kpi.pst_total_pending, 2);
        assert_eq!(kpi.total_value_usd, 0.0);
    }
}
