//! Фильтрация и сортировка списка отгрузок для дашборда.
//!
//! Фильтр = логическое И независимых предикатов; сортировка применяется
//! строго после фильтрации и только по одному ключу.

use chrono::NaiveDate;
use contracts::domain::a001_shipment::ShipmentRecord;
use contracts::enums::transport_type::code_for_label;
use contracts::enums::workflow_status::status_priority;
use contracts::enums::{PoType, TransportType, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::shared::date_utils::{date_range, DateFilterMode, DateRange};
use crate::shared::list_utils::{sort_list, Searchable, Sortable};

const FIELD_CLEAR_DATE: &str = "date_clear";
const FIELD_STATUS: &str = "status";

/// Значение фильтра, отключающее предикат
const ALL: &str = "all";

/// Режим сортировки списка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Исходный порядок
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "clearDate-asc")]
    ClearDateAsc,
    #[serde(rename = "clearDate-desc")]
    ClearDateDesc,
    #[serde(rename = "status-asc")]
    StatusAsc,
    #[serde(rename = "status-desc")]
    StatusDesc,
}

impl SortMode {
    /// Поле и направление (true = по возрастанию)
    fn field_and_direction(&self) -> Option<(&'static str, bool)> {
        match self {
            SortMode::None => None,
            SortMode::ClearDateAsc => Some((FIELD_CLEAR_DATE, true)),
            SortMode::ClearDateDesc => Some((FIELD_CLEAR_DATE, false)),
            SortMode::StatusAsc => Some((FIELD_STATUS, true)),
            SortMode::StatusDesc => Some((FIELD_STATUS, false)),
        }
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortMode::None),
            "clearDate-asc" => Ok(SortMode::ClearDateAsc),
            "clearDate-desc" => Ok(SortMode::ClearDateDesc),
            "status-asc" => Ok(SortMode::StatusAsc),
            "status-desc" => Ok(SortMode::StatusDesc),
            other => Err(format!("Unknown sort mode: {}", other)),
        }
    }
}

/// Отдельные предикаты фильтра; порядок применения на результат не влияет
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Transport,
    PoType,
    PstStatus,
    PswStatus,
    Search,
    DateWindow,
}

impl Predicate {
    pub const ALL: [Predicate; 6] = [
        Predicate::Transport,
        Predicate::PoType,
        Predicate::PstStatus,
        Predicate::PswStatus,
        Predicate::Search,
        Predicate::DateWindow,
    ];
}

/// Состояние панели фильтров дашборда
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentFilter {
    /// Подпись категории ("Sea Freight") или код; "" / "all" — без фильтра
    pub transport: String,
    /// Вкладка типа PO; "" / "all" — без фильтра
    pub po_type: String,
    /// Точный код статуса PST; "" — без фильтра
    pub pst_status: String,
    /// Точный код статуса PSW; "" — без фильтра
    pub psw_status: String,
    pub search: String,
    /// Окно по ETD
    pub date_filter: DateFilterMode,
    pub sort: SortMode,
}

fn is_bypass(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

impl ShipmentFilter {
    /// Проверка одного предиката. `range` — уже вычисленное окно дат.
    pub fn matches_predicate(
        &self,
        record: &ShipmentRecord,
        predicate: Predicate,
        range: &DateRange,
    ) -> bool {
        match predicate {
            Predicate::Transport => {
                if is_bypass(&self.transport) {
                    return true;
                }
                let wanted = code_for_label(&self.transport).unwrap_or(self.transport.trim());
                record
                    .transport_type
                    .as_ref()
                    .map(|t| t.code() == wanted)
                    .unwrap_or(false)
            }
            Predicate::PoType => {
                if is_bypass(&self.po_type) {
                    return true;
                }
                record.po_type.as_ref() == Some(&PoType::from_code(&self.po_type))
            }
            Predicate::PstStatus => {
                self.pst_status.is_empty()
                    || record.pst_status.as_deref() == Some(self.pst_status.as_str())
            }
            Predicate::PswStatus => {
                self.psw_status.is_empty()
                    || record.psw_status.as_deref() == Some(self.psw_status.as_str())
            }
            Predicate::Search => record.matches_filter(&self.search),
            Predicate::DateWindow => range.contains(record.etd),
        }
    }

    pub fn matches(&self, record: &ShipmentRecord, range: &DateRange) -> bool {
        Predicate::ALL
            .iter()
            .all(|p| self.matches_predicate(record, *p, range))
    }
}

impl Searchable for ShipmentRecord {
    fn search_values(&self) -> Vec<&str> {
        self.search_fields().into_iter().flatten().collect()
    }
}

impl Sortable for ShipmentRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            FIELD_CLEAR_DATE => self.date_clear.cmp(&other.date_clear),
            FIELD_STATUS => status_priority(self.pst_status.as_deref())
                .cmp(&status_priority(other.pst_status.as_deref())),
            _ => Ordering::Equal,
        }
    }

    fn is_blank(&self, field: &str) -> bool {
        field == FIELD_CLEAR_DATE && self.date_clear.is_none()
    }
}

/// Пункт выпадающего списка панели фильтров
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Варианты для панели фильтров; первый пункт каждого списка отключает фильтр
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub transport: Vec<FilterOption>,
    pub po_type: Vec<FilterOption>,
    pub status: Vec<FilterOption>,
}

pub fn filter_options() -> FilterOptions {
    let all = FilterOption::new(ALL, "All");
    FilterOptions {
        transport: std::iter::once(all.clone())
            .chain(
                TransportType::all()
                    .iter()
                    .map(|t| FilterOption::new(t.display_name(), t.display_name())),
            )
            .collect(),
        po_type: std::iter::once(all)
            .chain(
                [PoType::Single, PoType::CoLoad]
                    .iter()
                    .map(|t| FilterOption::new(t.code(), t.code())),
            )
            .collect(),
        status: std::iter::once(FilterOption::new("", "All"))
            .chain(
                WorkflowStatus::all()
                    .iter()
                    .map(|s| FilterOption::new(s.code(), s.display_name())),
            )
            .collect(),
    }
}

/// Сортировка отфильтрованного списка; `SortMode::None` порядок не меняет
pub fn sort_shipments(records: &mut [ShipmentRecord], mode: SortMode) {
    if let Some((field, ascending)) = mode.field_and_direction() {
        sort_list(records, field, ascending);
    }
}

/// Фильтр + сортировка. Исходный список не меняется.
pub fn filter_shipments(
    records: &[ShipmentRecord],
    filter: &ShipmentFilter,
    today: NaiveDate,
) -> Vec<ShipmentRecord> {
    let range = date_range(&filter.date_filter, today);
    let mut result: Vec<ShipmentRecord> = records
        .iter()
        .filter(|r| filter.matches(r, &range))
        .cloned()
        .collect();
    sort_shipments(&mut result, filter.sort);
    result
}
