use chrono::NaiveDate;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Разбор календарной даты из строки бэкенда.
/// Принимает "YYYY-MM-DD" и ISO datetime ("YYYY-MM-DDTHH:MM:SS..."),
/// пустые и нераспознанные значения дают `None`.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, ISO_DATE_FORMAT).ok()
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
