use super::aggregate::ExpenseLineItem;
use serde::{Deserialize, Serialize};

/// Пакетная отправка строк расходов PSW
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExpensesRequest {
    pub po_id: String,
    pub psw_number: Option<String>,
    pub items: Vec<ExpenseLineItem>,
}
