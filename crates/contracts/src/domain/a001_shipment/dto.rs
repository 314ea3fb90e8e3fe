use super::aggregate::ShipmentRecord;
use crate::enums::{PoType, TransportType};
use crate::shared::dates::parse_iso_date;
use crate::shared::lenient::{opt_f64, opt_string, string_list};
use serde::{Deserialize, Serialize};

/// Строка списка PO в том виде, в каком её отдаёт бэкенд.
/// Все поля необязательны; нормализация в `ShipmentRecord` через `From`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoListItemDto {
    #[serde(default, deserialize_with = "opt_string", alias = "poId")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "poNo")]
    pub po_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub supplier_code: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub supplier_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "opt_string",
        rename = "type",
        alias = "transportType"
    )]
    pub transport_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub po_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub bill_type: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub pst_status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub psw_status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub pst_jagota_status: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub psw_jagota_status: Option<String>,

    #[serde(default, deserialize_with = "opt_string")]
    pub po_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub etd: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub eta: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub date_clear: Option<String>,

    #[serde(default, deserialize_with = "opt_f64")]
    pub total_value: Option<f64>,
    #[serde(default, deserialize_with = "opt_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "invoiceNo")]
    pub invoice_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub reference_key: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "importEntryNo")]
    pub import_entry_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "blNo")]
    pub bl_awb_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub origin_country: Option<String>,

    #[serde(default, deserialize_with = "string_list")]
    pub related_suppliers: Vec<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "pstNo")]
    pub pst_number: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "pswNo")]
    pub psw_number: Option<String>,
}

impl From<PoListItemDto> for ShipmentRecord {
    fn from(dto: PoListItemDto) -> Self {
        let po_type = dto.po_type.as_deref().map(PoType::from_code);
        // Список связанных поставщиков имеет смысл только для сборных заказов
        let related_suppliers = if po_type.as_ref().map(PoType::is_grouped).unwrap_or(false) {
            dto.related_suppliers
        } else {
            Vec::new()
        };
        let po_number = dto.po_number.unwrap_or_default();

        Self {
            id: dto.id.unwrap_or_else(|| po_number.clone()),
            po_number,
            supplier_code: dto.supplier_code.unwrap_or_default(),
            supplier_name: dto.supplier_name.unwrap_or_default(),
            transport_type: dto.transport_type.as_deref().map(TransportType::from_code),
            po_type,
            bill_type: dto.bill_type,
            pst_status: dto.pst_status,
            psw_status: dto.psw_status,
            pst_jagota_status: dto.pst_jagota_status,
            psw_jagota_status: dto.psw_jagota_status,
            po_date: dto.po_date.as_deref().and_then(parse_iso_date),
            etd: dto.etd.as_deref().and_then(parse_iso_date),
            eta: dto.eta.as_deref().and_then(parse_iso_date),
            date_clear: dto.date_clear.as_deref().and_then(parse_iso_date),
            total_value: dto.total_value.unwrap_or(0.0),
            currency: dto.currency,
            invoice_number: dto.invoice_number,
            reference_key: dto.reference_key,
            import_entry_number: dto.import_entry_number,
            bl_awb_number: dto.bl_awb_number,
            origin_country: dto.origin_country,
            related_suppliers,
            pst_number: dto.pst_number,
            psw_number: dto.psw_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_full_row_is_normalized() {
        let json = r#"{
            "id": 101,
            "poNumber": "PO-2025-001",
            "supplierCode": "S01",
            "supplierName": "Acme Foods",
            "type": "SEA",
            "poType": "Co-load",
            "pstStatus": "Y",
            "pswStatus": null,
            "etd": "2025-07-14T00:00:00",
            "dateClear": "",
            "totalValue": "12500.75",
            "relatedSuppliers": "S02,S03"
        }"#;
        let dto: PoListItemDto = serde_json::from_str(json).unwrap();
        let record = ShipmentRecord::from(dto);

        assert_eq!(record.id, "101");
        assert_eq!(record.transport_type, Some(TransportType::Sea));
        assert_eq!(record.po_type, Some(PoType::CoLoad));
        assert_eq!(record.etd, NaiveDate::from_ymd_opt(2025, 7, 14));
        assert_eq!(record.date_clear, None);
        assert_eq!(record.total_value, 12500.75);
        assert_eq!(record.related_suppliers, vec!["S02", "S03"]);
        assert_eq!(record.psw_status, None);
    }

    #[test]
    fn test_empty_row_does_not_fail() {
        let dto: PoListItemDto = serde_json::from_str("{}").unwrap();
        let record = ShipmentRecord::from(dto);
        assert_eq!(record.po_number, "");
        assert_eq!(record.total_value, 0.0);
        assert!(record.transport_type.is_none());
    }

    #[test]
    fn test_related_suppliers_dropped_for_single_po() {
        let dto: PoListItemDto =
            serde_json::from_str(r#"{"poType": "Single", "relatedSuppliers": ["S02"]}"#).unwrap();
        assert!(ShipmentRecord::from(dto).related_suppliers.is_empty());
    }
}
