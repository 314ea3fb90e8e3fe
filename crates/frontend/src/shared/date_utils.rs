//! Политика дат для фильтров: режим фильтра -> конкретный диапазон.

use chrono::{Duration, Local, NaiveDate};
use contracts::shared::dates::parse_iso_date;
use serde::{Deserialize, Serialize};

/// Режим фильтра по дате
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum DateFilterMode {
    Today,
    #[serde(rename = "last7days")]
    Last7Days,
    /// Даты введены пользователем как есть; любая может отсутствовать
    Custom {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    },
}

impl Default for DateFilterMode {
    /// Пустой пользовательский диапазон: ничего не отсекает
    fn default() -> Self {
        DateFilterMode::Custom {
            start: None,
            end: None,
        }
    }
}

/// Диапазон дат, границы включительно; отсутствующая граница не ограничивает
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Попадает ли дата в диапазон.
    /// Без даты запись проходит только неограниченный диапазон.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(date) = date else {
            return false;
        };
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

/// Диапазон для режима фильтра относительно `today`
pub fn date_range(mode: &DateFilterMode, today: NaiveDate) -> DateRange {
    match mode {
        DateFilterMode::Today => DateRange {
            start: Some(today),
            end: Some(today),
        },
        DateFilterMode::Last7Days => DateRange {
            start: Some(today - Duration::days(6)),
            end: Some(today),
        },
        DateFilterMode::Custom { start, end } => DateRange {
            start: start.as_deref().and_then(parse_iso_date),
            end: end.as_deref().and_then(parse_iso_date),
        },
    }
}

/// Текущая локальная дата
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Дата для таблиц и выгрузок: DD/MM/YYYY, пустая строка если даты нет
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_today_range() {
        let range = date_range(&DateFilterMode::Today, d(2025, 7, 14));
        assert!(range.contains(Some(d(2025, 7, 14))));
        assert!(!range.contains(Some(d(2025, 7, 13))));
    }

    #[test]
    fn test_last_7_days_includes_today_and_six_before() {
        let range = date_range(&DateFilterMode::Last7Days, d(2025, 7, 14));
        assert_eq!(range.start, Some(d(2025, 7, 8)));
        assert_eq!(range.end, Some(d(2025, 7, 14)));
        assert!(range.contains(Some(d(2025, 7, 8))));
        assert!(!range.contains(Some(d(2025, 7, 7))));
    }

    #[test]
    fn test_custom_without_dates_is_unbounded() {
        let range = date_range(&DateFilterMode::default(), d(2025, 7, 14));
        assert!(range.is_unbounded());
        assert!(range.contains(None));
        assert!(range.contains(Some(d(1999, 1, 1))));
    }

    #[test]
    fn test_custom_single_bound_constrains() {
        let mode = DateFilterMode::Custom {
            start: Some("2025-07-10".to_string()),
            end: None,
        };
        let range = date_range(&mode, d(2025, 7, 14));
        assert!(range.contains(Some(d(2030, 1, 1))));
        assert!(!range.contains(Some(d(2025, 7, 9))));
        assert!(!range.contains(None));
    }

    #[test]
    fn test_custom_invalid_input_is_ignored() {
        let mode = DateFilterMode::Custom {
            start: Some("yesterday".to_string()),
            end: Some("".to_string()),
        };
        assert!(date_range(&mode, d(2025, 7, 14)).is_unbounded());
    }

    #[test]
    fn test_mode_serde() {
        let mode: DateFilterMode = serde_json::from_str(r#"{"mode": "last7days"}"#).unwrap();
        assert_eq!(mode, DateFilterMode::Last7Days);
        let mode: DateFilterMode =
            serde_json::from_str(r#"{"mode": "custom", "end": "2025-01-31"}"#).unwrap();
        assert_eq!(
            mode,
            DateFilterMode::Custom {
                start: None,
                end: Some("2025-01-31".to_string())
            }
        );
    }

    #[test]
    fn test_format_display_date() {
        assert_eq!(format_display_date(Some(d(2025, 3, 15))), "15/03/2025");
        assert_eq!(format_display_date(None), "");
    }
}
