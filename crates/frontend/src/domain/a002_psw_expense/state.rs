use contracts::domain::a002_psw_expense::{ExpenseCodeTable, ExpenseLineItem, SubmitExpensesRequest};
use serde::Serialize;
use uuid::Uuid;

use super::calculator::{recalculate, ExpenseField, ExpenseTotals};

/// Форма расходов PSW: строки, справочник кодов и признак отправки.
///
/// После отправки форма только для чтения.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    items: Vec<ExpenseLineItem>,
    codes: ExpenseCodeTable,
    submitted: bool,
}

/// Состояние формы для слоя представления
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseFormView<'a> {
    pub items: &'a [ExpenseLineItem],
    pub totals: ExpenseTotals,
    pub submitted: bool,
}

impl ExpenseFormState {
    pub fn new(codes: ExpenseCodeTable) -> Self {
        Self {
            items: Vec::new(),
            codes,
            submitted: false,
        }
    }

    pub fn items(&self) -> &[ExpenseLineItem] {
        &self.items
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Новая пустая строка; `None` после отправки
    pub fn add_item(&mut self) -> Option<Uuid> {
        if self.submitted {
            return None;
        }
        let item = ExpenseLineItem::new();
        let id = item.line_id;
        self.items.push(item);
        Some(id)
    }

    /// Изменить поле строки. Возвращает новое состояние строки.
    pub fn edit(&mut self, line_id: Uuid, field: ExpenseField, value: &str) -> Option<&ExpenseLineItem> {
        if self.submitted {
            log::debug!("Ignoring edit of {:?}: expenses already submitted", field);
            return None;
        }
        let codes = &self.codes;
        let item = self.items.iter_mut().find(|i| i.line_id == line_id)?;
        *item = recalculate(item, field, value, codes);
        Some(&*item)
    }

    pub fn remove(&mut self, line_id: Uuid) -> bool {
        if self.submitted {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|i| i.line_id != line_id);
        self.items.len() != before
    }

    pub fn totals(&self) -> ExpenseTotals {
        ExpenseTotals::from_items(&self.items)
    }

    pub fn view(&self) -> ExpenseFormView<'_> {
        ExpenseFormView {
            items: &self.items,
            totals: self.totals(),
            submitted: self.submitted,
        }
    }

    /// Тело запроса на отправку; `None`, если отправлять нечего
    pub fn submission(&self, po_id: &str, psw_number: Option<&str>) -> Option<SubmitExpensesRequest> {
        if self.submitted || self.items.is_empty() {
            return None;
        }
        Some(SubmitExpensesRequest {
            po_id: po_id.to_string(),
            psw_number: psw_number.map(str::to_string),
            items: self.items.clone(),
        })
    }

    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_psw_expense::ExpenseCode;

    fn form() -> ExpenseFormState {
        ExpenseFormState::new(ExpenseCodeTable::new(vec![ExpenseCode {
            code: "FRT".to_string(),
            name: None,
            vat_percent: Some(7.0),
        }]))
    }

    #[test]
    fn test_edit_recalculates_line() {
        let mut form = form();
        let id = form.add_item().unwrap();
        form.edit(id, ExpenseField::ExpenseCode, "FRT");
        form.edit(id, ExpenseField::Qty, "2");
        let item = form.edit(id, ExpenseField::Rate, "100").unwrap().clone();
        assert_eq!(item.sub_total, 200.0);
        assert!((form.totals().total - 214.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_line_is_ignored() {
        let mut form = form();
        form.add_item();
        assert!(form.edit(Uuid::new_v4(), ExpenseField::Qty, "1").is_none());
        assert!(!form.remove(Uuid::new_v4()));
    }

    #[test]
    fn test_submitted_form_is_read_only() {
        let mut form = form();
        let id = form.add_item().unwrap();
        form.edit(id, ExpenseField::Qty, "1");
        let request = form.submission("PO-1", Some("PSW-9")).unwrap();
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.psw_number.as_deref(), Some("PSW-9"));

        form.mark_submitted();
        assert!(form.edit(id, ExpenseField::Qty, "5").is_none());
        assert_eq!(form.items()[0].qty, 1.0);
        assert!(form.add_item().is_none());
        assert!(!form.remove(id));
        assert!(form.submission("PO-1", None).is_none());
    }

    #[test]
    fn test_empty_form_has_nothing_to_submit() {
        assert!(form().submission("PO-1", None).is_none());
    }

    #[test]
    fn test_view_carries_totals() {
        let mut form = form();
        let id = form.add_item().unwrap();
        form.edit(id, ExpenseField::Qty, "2");
        form.edit(id, ExpenseField::Rate, "10");
        let json = serde_json::to_value(form.view()).unwrap();
        assert_eq!(json["items"][0]["subTotal"], 20.0);
        assert_eq!(json["totals"]["total"], 20.0);
        assert_eq!(json["submitted"], false);
    }
}
