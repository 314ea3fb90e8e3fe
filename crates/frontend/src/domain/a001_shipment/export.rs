use contracts::domain::a001_shipment::ShipmentRecord;

use crate::shared::date_utils::format_display_date;
use crate::shared::export::ExcelExportable;
use crate::shared::number_format::format_amount;

impl ExcelExportable for ShipmentRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "PO Number",
            "Supplier Code",
            "Supplier",
            "Type",
            "PO Type",
            "Bill Type",
            "PST Status",
            "PSW Status",
            "PO Date",
            "ETD",
            "ETA",
            "Date Clear",
            "Total Value",
            "Invoice No",
            "Reference Key",
            "PST No",
            "PSW No",
            "Related Suppliers",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.po_number.clone(),
            self.supplier_code.clone(),
            self.supplier_name.clone(),
            self.transport_type
                .as_ref()
                .map(|t| t.code().to_string())
                .unwrap_or_default(),
            self.po_type
                .as_ref()
                .map(|t| t.code().to_string())
                .unwrap_or_default(),
            self.bill_type.clone().unwrap_or_default(),
            self.pst_status.clone().unwrap_or_default(),
            self.psw_status.clone().unwrap_or_default(),
            format_display_date(self.po_date),
            format_display_date(self.etd),
            format_display_date(self.eta),
            format_display_date(self.date_clear),
            format_amount(self.total_value),
            self.invoice_number.clone().unwrap_or_default(),
            self.reference_key.clone().unwrap_or_default(),
            self.pst_number.clone().unwrap_or_default(),
            self.psw_number.clone().unwrap_or_default(),
            self.related_suppliers.join(", "),
        ]
    }
}
