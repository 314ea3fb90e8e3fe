use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Строка расходов внутри PSW.
///
/// Производные поля (`sub_total`, `vat_amount`, `total`) хранятся,
/// но всегда пересчитываются из входных при любом изменении.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseLineItem {
    /// Клиентский ключ строки до отправки
    pub line_id: Uuid,
    pub expense_code: Option<String>,
    pub description: String,

    pub qty: f64,
    pub rate: f64,
    /// qty × rate
    pub sub_total: f64,

    /// База НДС; равна `sub_total`, пока пользователь не задал её вручную
    pub vat_base_amount: f64,
    #[serde(default)]
    pub vat_base_overridden: bool,
    pub vat_percent: f64,
    /// vat_base_amount × vat_percent / 100
    pub vat_amount: f64,

    pub excise_vat_amount: f64,
    pub interior_vat: f64,
    /// sub_total + vat_amount + excise_vat_amount + interior_vat
    pub total: f64,
}

impl ExpenseLineItem {
    pub fn new() -> Self {
        Self {
            line_id: Uuid::new_v4(),
            expense_code: None,
            description: String::new(),
            qty: 0.0,
            rate: 0.0,
            sub_total: 0.0,
            vat_base_amount: 0.0,
            vat_base_overridden: false,
            vat_percent: 0.0,
            vat_amount: 0.0,
            excise_vat_amount: 0.0,
            interior_vat: 0.0,
            total: 0.0,
        }
    }
}

impl Default for ExpenseLineItem {
    fn default() -> Self {
        Self::new()
    }
}
