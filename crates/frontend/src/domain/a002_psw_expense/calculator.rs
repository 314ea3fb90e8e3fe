//! Пересчёт строки расходов PSW.
//!
//! Единственная реализация арифметики для всех форм PSW. Изменение поля
//! возвращает новую строку, в которой вся цепочка зависимых полей уже
//! пересчитана; промежуточных состояний снаружи не видно.

use contracts::domain::a002_psw_expense::{ExpenseCodeTable, ExpenseLineItem};
use serde::{Deserialize, Serialize};

/// Редактируемое поле строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseField {
    Qty,
    Rate,
    ExpenseCode,
    /// Пустое значение возвращает базу НДС к `sub_total`
    VatBaseAmount,
    VatPercent,
    ExciseVatAmount,
    InteriorVat,
    Description,
}

/// Разбор числа из поля ввода; всё, что не число, становится 0
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn apply_total(item: &mut ExpenseLineItem) {
    item.total = item.sub_total + item.vat_amount + item.excise_vat_amount + item.interior_vat;
}

fn apply_vat(item: &mut ExpenseLineItem) {
    item.vat_amount = item.vat_base_amount * item.vat_percent / 100.0;
    apply_total(item);
}

fn apply_sub_total(item: &mut ExpenseLineItem) {
    item.sub_total = item.qty * item.rate;
    if !item.vat_base_overridden {
        item.vat_base_amount = item.sub_total;
    }
    apply_vat(item);
}

/// Новое состояние строки после изменения одного поля
pub fn recalculate(
    item: &ExpenseLineItem,
    field: ExpenseField,
    value: &str,
    codes: &ExpenseCodeTable,
) -> ExpenseLineItem {
    let mut next = item.clone();
    match field {
        ExpenseField::Qty => {
            next.qty = parse_amount(value);
            apply_sub_total(&mut next);
        }
        ExpenseField::Rate => {
            next.rate = parse_amount(value);
            apply_sub_total(&mut next);
        }
        // Новый код считает НДС от текущего sub_total: ручная база сбрасывается
        ExpenseField::ExpenseCode => {
            let code = value.trim();
            next.expense_code = Some(code.to_string()).filter(|c| !c.is_empty());
            next.vat_percent = codes.vat_percent(code);
            next.vat_base_overridden = false;
            next.vat_base_amount = next.sub_total;
            apply_vat(&mut next);
        }
        ExpenseField::VatBaseAmount => {
            if value.trim().is_empty() {
                next.vat_base_overridden = false;
                next.vat_base_amount = next.sub_total;
            } else {
                next.vat_base_overridden = true;
                next.vat_base_amount = parse_amount(value);
            }
            apply_vat(&mut next);
        }
        ExpenseField::VatPercent => {
            next.vat_percent = parse_amount(value);
            apply_vat(&mut next);
        }
        ExpenseField::ExciseVatAmount => {
            next.excise_vat_amount = parse_amount(value);
            apply_total(&mut next);
        }
        ExpenseField::InteriorVat => {
            next.interior_vat = parse_amount(value);
            apply_total(&mut next);
        }
        ExpenseField::Description => {
            next.description = value.to_string();
        }
    }
    next
}

/// Итоги по всем строкам формы
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    pub sub_total: f64,
    pub vat_amount: f64,
    pub excise_vat_amount: f64,
    pub interior_vat: f64,
    pub total: f64,
}

impl ExpenseTotals {
    pub fn from_items(items: &[ExpenseLineItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            sub_total: acc.sub_total + item.sub_total,
            vat_amount: acc.vat_amount + item.vat_amount,
            excise_vat_amount: acc.excise_vat_amount + item.excise_vat_amount,
            interior_vat: acc.interior_vat + item.interior_vat,
            total: acc.total + item.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_psw_expense::ExpenseCode;

    fn codes() -> ExpenseCodeTable {
        ExpenseCodeTable::new(vec![
            ExpenseCode {
                code: "FRT".to_string(),
                name: Some("Freight".to_string()),
                vat_percent: Some(7.0),
            },
            ExpenseCode {
                code: "DUTY".to_string(),
                name: None,
                vat_percent: None,
            },
        ])
    }

    fn edit(item: &ExpenseLineItem, field: ExpenseField, value: &str) -> ExpenseLineItem {
        recalculate(item, field, value, &codes())
    }

    fn assert_consistent(item: &ExpenseLineItem) {
        let expected =
            item.sub_total + item.vat_amount + item.excise_vat_amount + item.interior_vat;
        assert!(
            (item.total - expected).abs() < 1e-9,
            "total {} != {}",
            item.total,
            expected
        );
    }

    #[test]
    fn test_basic_line() {
        let item = ExpenseLineItem::new();
        let item = edit(&item, ExpenseField::ExpenseCode, "FRT");
        let item = edit(&item, ExpenseField::Qty, "2");
        let item = edit(&item, ExpenseField::Rate, "100");
        let item = edit(&item, ExpenseField::ExciseVatAmount, "5");
        let item = edit(&item, ExpenseField::InteriorVat, "0");

        assert_eq!(item.sub_total, 200.0);
        assert!((item.vat_amount - 14.0).abs() < 1e-9);
        assert!((item.total - 219.0).abs() < 1e-9);
    }

    #[test]
    fn test_qty_cascades_in_one_step() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::ExpenseCode, "FRT");
        let item = edit(&item, ExpenseField::Rate, "50");
        let before = item.clone();
        let item = edit(&item, ExpenseField::Qty, "3");

        assert_eq!(before.total, 0.0);
        assert_eq!(item.sub_total, 150.0);
        assert_eq!(item.vat_base_amount, 150.0);
        assert!((item.vat_amount - 10.5).abs() < 1e-9);
        assert!((item.total - 160.5).abs() < 1e-9);
    }

    #[test]
    fn test_excise_does_not_touch_vat() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::ExpenseCode, "FRT");
        let item = edit(&item, ExpenseField::Qty, "1");
        let item = edit(&item, ExpenseField::Rate, "100");
        let vat = item.vat_amount;
        let item = edit(&item, ExpenseField::ExciseVatAmount, "12.5");
        let item = edit(&item, ExpenseField::InteriorVat, "3");
        assert_eq!(item.vat_amount, vat);
        assert!((item.total - 122.5).abs() < 1e-9);
    }

    #[test]
    fn test_vat_base_override_never_changes_sub_total() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::ExpenseCode, "FRT");
        let item = edit(&item, ExpenseField::Qty, "2");
        let item = edit(&item, ExpenseField::Rate, "100");
        let item = edit(&item, ExpenseField::VatBaseAmount, "1000");
        assert_eq!(item.sub_total, 200.0);
        assert!((item.vat_amount - 70.0).abs() < 1e-9);

        // override stays in place when qty changes
        let item = edit(&item, ExpenseField::Qty, "3");
        assert_eq!(item.sub_total, 300.0);
        assert_eq!(item.vat_base_amount, 1000.0);

        // clearing the field follows sub_total again
        let item = edit(&item, ExpenseField::VatBaseAmount, "");
        assert_eq!(item.vat_base_amount, 300.0);
        assert!((item.vat_amount - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_expense_code_change_uses_current_sub_total() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::Qty, "4");
        let item = edit(&item, ExpenseField::Rate, "25");
        assert_eq!(item.vat_amount, 0.0);
        let item = edit(&item, ExpenseField::ExpenseCode, "FRT");
        assert_eq!(item.vat_percent, 7.0);
        assert!((item.vat_amount - 7.0).abs() < 1e-9);
        let item = edit(&item, ExpenseField::ExpenseCode, "UNKNOWN");
        assert_eq!(item.vat_percent, 0.0);
        assert_eq!(item.vat_amount, 0.0);
        assert_eq!(item.total, 100.0);
    }

    #[test]
    fn test_invalid_input_becomes_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("1,234.50"), 1234.5);
        assert_eq!(parse_amount(" -3 "), -3.0);

        let item = edit(&ExpenseLineItem::new(), ExpenseField::Qty, "2");
        let item = edit(&item, ExpenseField::Rate, "ten");
        assert_eq!(item.rate, 0.0);
        assert_eq!(item.total, 0.0);
    }

    #[test]
    fn test_full_precision_kept_between_edits() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::Qty, "3");
        let item = edit(&item, ExpenseField::Rate, "0.333");
        let item = edit(&item, ExpenseField::VatPercent, "7");
        assert!((item.sub_total - 0.999).abs() < 1e-12);
        assert!((item.vat_amount - 0.06993).abs() < 1e-12);
    }

    #[test]
    fn test_total_invariant_over_edit_sequence() {
        let fields = [
            ExpenseField::Qty,
            ExpenseField::Rate,
            ExpenseField::ExpenseCode,
            ExpenseField::VatBaseAmount,
            ExpenseField::VatPercent,
            ExpenseField::ExciseVatAmount,
            ExpenseField::InteriorVat,
            ExpenseField::Description,
        ];
        let values = ["2", "100.25", "FRT", "", "7", "0.1", "x", "DUTY", "1e3", "-4.5", "33.333"];

        let mut item = ExpenseLineItem::new();
        let mut seed: u64 = 17;
        for _ in 0..500 {
            // простой LCG, чтобы последовательность была воспроизводимой
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let field = fields[(seed >> 33) as usize % fields.len()];
            let value = values[(seed >> 17) as usize % values.len()];
            item = edit(&item, field, value);
            assert_consistent(&item);
        }
    }

    #[test]
    fn test_totals_across_items() {
        let a = edit(&ExpenseLineItem::new(), ExpenseField::ExpenseCode, "FRT");
        let a = edit(&a, ExpenseField::Qty, "2");
        let a = edit(&a, ExpenseField::Rate, "100");
        let b = edit(&ExpenseLineItem::new(), ExpenseField::Qty, "1");
        let b = edit(&b, ExpenseField::Rate, "50");
        let b = edit(&b, ExpenseField::ExciseVatAmount, "5");

        let totals = ExpenseTotals::from_items(&[a, b]);
        assert_eq!(totals.sub_total, 250.0);
        assert!((totals.vat_amount - 14.0).abs() < 1e-9);
        assert_eq!(totals.excise_vat_amount, 5.0);
        assert!((totals.total - 269.0).abs() < 1e-9);
        assert_eq!(ExpenseTotals::from_items(&[]), ExpenseTotals::default());
    }

    #[test]
    fn test_code_change_uses_current_sub_total_over_override() {
        let item = edit(&ExpenseLineItem::new(), ExpenseField::Qty, "2");
        let item = edit(&item, ExpenseField::Rate, "100");
        let item = edit(&item, ExpenseField::VatBaseAmount, "1000");
        assert!(item.vat_base_overridden);

        let item = edit(&item, ExpenseField::ExpenseCode, "FRT");
        assert!(!item.vat_base_overridden);
        assert_eq!(item.vat_base_amount, 200.0);
        assert!((item.vat_amount - 14.0).abs() < 1e-9);
        assert!((item.total - 214.0).abs() < 1e-9);
    }
}
