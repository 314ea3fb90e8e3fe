use crate::enums::workflow_status::is_done;
use crate::enums::{PoType, TransportType};
use crate::shared::lenient::{f64_or_zero, opt_date, string_list, string_or_empty};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Снимок жизненного цикла одного заказа (PO): доставка и таможня.
///
/// Запись только читается клиентом. Изменения (создание PST/PSW)
/// делает бэкенд, после чего список запрашивается заново.
/// Частичная запись из JS разбирается: недостающее берётся по умолчанию.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ShipmentRecord {
    #[serde(deserialize_with = "string_or_empty")]
    pub id: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub po_number: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub supplier_code: String,
    #[serde(deserialize_with = "string_or_empty")]
    pub supplier_name: String,

    /// Air / Sea / Land
    #[serde(rename = "type")]
    pub transport_type: Option<TransportType>,
    /// Single / Co-load
    pub po_type: Option<PoType>,
    /// Метка срочности
    pub bill_type: Option<String>,

    /// Сырые коды статусов (N / P / Y)
    pub pst_status: Option<String>,
    pub psw_status: Option<String>,
    /// Независимое согласование со стороны JAGOTA
    pub pst_jagota_status: Option<String>,
    pub psw_jagota_status: Option<String>,

    #[serde(deserialize_with = "opt_date")]
    pub po_date: Option<NaiveDate>,
    #[serde(deserialize_with = "opt_date")]
    pub etd: Option<NaiveDate>,
    #[serde(deserialize_with = "opt_date")]
    pub eta: Option<NaiveDate>,
    #[serde(deserialize_with = "opt_date")]
    pub date_clear: Option<NaiveDate>,

    /// Сумма заказа; в агрегатах считается в USD
    #[serde(deserialize_with = "f64_or_zero")]
    pub total_value: f64,
    pub currency: Option<String>,
    pub invoice_number: Option<String>,
    pub reference_key: Option<String>,
    pub import_entry_number: Option<String>,
    pub bl_awb_number: Option<String>,
    pub origin_country: Option<String>,

    /// Поставщики сборного заказа; пусто для одиночных
    #[serde(deserialize_with = "string_list")]
    pub related_suppliers: Vec<String>,
    pub pst_number: Option<String>,
    pub psw_number: Option<String>,
}

impl ShipmentRecord {
    pub fn pst_done(&self) -> bool {
        is_done(self.pst_status.as_deref())
    }

    pub fn psw_done(&self) -> bool {
        is_done(self.psw_status.as_deref())
    }

    /// PSW отмечен выполненным раньше PST: данные бэкенда противоречат процессу
    pub fn violates_workflow_order(&self) -> bool {
        self.psw_done() && !self.pst_done()
    }

    /// Поля, по которым работает текстовый поиск
    pub fn search_fields(&self) -> [Option<&str>; 9] {
        [
            Some(self.supplier_name.as_str()),
            Some(self.po_number.as_str()),
            self.reference_key.as_deref(),
            self.invoice_number.as_deref(),
            self.import_entry_number.as_deref(),
            self.pst_number.as_deref(),
            self.psw_number.as_deref(),
            self.bl_awb_number.as_deref(),
            self.origin_country.as_deref(),
        ]
    }
}
