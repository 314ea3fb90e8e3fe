//! Форматирование денежных сумм для таблиц и форм

/// Сумма с 2 знаками после точки и запятой как разделителем тысяч.
/// Только для отображения: в состоянии хранится полное значение.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let formatted = format!("{:.2}", value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" после округления выглядит странно
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && fraction == "00" {
        ""
    } else {
        sign
    };
    format!("{}{}.{}", sign, grouped, fraction)
}
