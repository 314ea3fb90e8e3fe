use crate::shared::lenient::{opt_f64, opt_string};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Код расхода из справочника бэкенда
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCode {
    #[serde(alias = "expenseCode")]
    pub code: String,
    #[serde(default, deserialize_with = "opt_string", alias = "expenseName")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_f64", alias = "vat")]
    pub vat_percent: Option<f64>,
}

/// Справочник кодов расходов: код -> ставка НДС
#[derive(Debug, Clone, Default)]
pub struct ExpenseCodeTable {
    codes: HashMap<String, ExpenseCode>,
}

impl ExpenseCodeTable {
    pub fn new(codes: Vec<ExpenseCode>) -> Self {
        Self {
            codes: codes.into_iter().map(|c| (c.code.clone(), c)).collect(),
        }
    }

    pub fn get(&self, code: &str) -> Option<&ExpenseCode> {
        self.codes.get(code)
    }

    /// Ставка НДС для кода; неизвестный код или пустая ставка дают 0
    pub fn vat_percent(&self, code: &str) -> f64 {
        self.get(code).and_then(|c| c.vat_percent).unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<Vec<ExpenseCode>> for ExpenseCodeTable {
    fn from(codes: Vec<ExpenseCode>) -> Self {
        Self::new(codes)
    }
}
