use contracts::domain::a001_shipment::{
    CreatePstRequest, CreatePswRequest, DocumentCreatedResponse, PoListItemDto, PoListQuery,
    ShipmentRecord,
};
use contracts::shared::dates::format_iso_date;

use crate::shared::api_utils::{get_data, post_authenticated, query_string, ApiError, ApiResult};
use crate::system::auth::AuthContext;

const API_BASE: &str = "/api/po";

/// Нормализация строк бэкенда в записи дашборда
pub fn normalize_po_list(rows: Vec<PoListItemDto>) -> Vec<ShipmentRecord> {
    rows.into_iter()
        .map(ShipmentRecord::from)
        .inspect(|record| {
            if record.violates_workflow_order() {
                log::warn!(
                    "PO {}: PSW is done while PST is not (pst={:?}, psw={:?})",
                    record.po_number,
                    record.pst_status,
                    record.psw_status
                );
            }
        })
        .collect()
}

/// Получить список PO
pub async fn fetch_po_list(
    ctx: &AuthContext,
    query: &PoListQuery,
) -> ApiResult<Vec<ShipmentRecord>> {
    let url = format!("{}/list{}", API_BASE, query_string(query)?);
    let rows: Vec<PoListItemDto> = get_data(ctx, &url).await?;
    log::debug!("PO list: {} rows", rows.len());
    Ok(normalize_po_list(rows))
}

/// Запрос на создание PST из записи
pub fn pst_request_for(record: &ShipmentRecord, remark: Option<String>) -> CreatePstRequest {
    CreatePstRequest {
        po_id: record.id.clone(),
        po_number: record.po_number.clone(),
        transport_type: record.transport_type.as_ref().map(|t| t.code().to_string()),
        etd: record.etd.map(format_iso_date),
        eta: record.eta.map(format_iso_date),
        bill_type: record.bill_type.clone(),
        remark,
    }
}

/// Запрос на создание PSW. PSW возможен только после завершённого PST.
pub fn psw_request_for(
    record: &ShipmentRecord,
    service_provider_code: Option<String>,
    remark: Option<String>,
) -> ApiResult<CreatePswRequest> {
    if !record.pst_done() {
        return Err(ApiError::Rejected(format!(
            "PST for {} must be completed before creating a PSW",
            record.po_number
        )));
    }
    let pst_number = record.pst_number.clone().ok_or_else(|| {
        ApiError::Rejected(format!("PO {} has no PST number", record.po_number))
    })?;
    Ok(CreatePswRequest {
        po_id: record.id.clone(),
        po_number: record.po_number.clone(),
        pst_number,
        service_provider_code,
        remark,
    })
}

/// Создать PST. После успеха список нужно перечитать (`ShipmentStore::invalidate`).
pub async fn create_pst(
    ctx: &AuthContext,
    request: &CreatePstRequest,
) -> ApiResult<DocumentCreatedResponse> {
    let created: DocumentCreatedResponse =
        post_authenticated(ctx, &format!("{}/pst", API_BASE), request).await?;
    log::info!("PST created for {}: {:?}", request.po_number, created.document_number);
    Ok(created)
}

/// Создать PSW по записи
pub async fn create_psw(
    ctx: &AuthContext,
    record: &ShipmentRecord,
    service_provider_code: Option<String>,
    remark: Option<String>,
) -> ApiResult<DocumentCreatedResponse> {
    ctx.require_token()?;
    let request = psw_request_for(record, service_provider_code, remark)?;
    let created: DocumentCreatedResponse =
        post_authenticated(ctx, &format!("{}/psw", API_BASE), &request).await?;
    log::info!("PSW created for {}: {:?}", request.po_number, created.document_number);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::TransportType;

    #[test]
    fn test_normalize_keeps_order_and_tolerates_gaps() {
        let rows: Vec<PoListItemDto> = serde_json::from_str(
            r#"[{"poNumber": "PO-2"}, {}, {"poNumber": "PO-1", "pswStatus": "Y"}]"#,
        )
        .unwrap();
        let records = normalize_po_list(rows);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].po_number, "PO-2");
        assert!(records[2].violates_workflow_order());
    }

    #[test]
    fn test_psw_requires_completed_pst() {
        let record = ShipmentRecord {
            id: "7".to_string(),
            po_number: "PO-7".to_string(),
            pst_status: Some("P".to_string()),
            pst_number: Some("PST-7".to_string()),
            ..Default::default()
        };
        let err = psw_request_for(&record, None, None).unwrap_err();
        assert!(matches!(err, ApiError::Rejected(_)));

        let done = ShipmentRecord {
            pst_status: Some("Y".to_string()),
            ..record
        };
        let request = psw_request_for(&done, Some("BRK01".to_string()), None).unwrap();
        assert_eq!(request.pst_number, "PST-7");
        assert_eq!(request.service_provider_code.as_deref(), Some("BRK01"));
    }

    #[test]
    fn test_psw_requires_pst_number() {
        let record = ShipmentRecord {
            pst_status: Some("Y".to_string()),
            ..Default::default()
        };
        assert!(psw_request_for(&record, None, None).is_err());
    }

    #[test]
    fn test_pst_request_copies_record() {
        let record = ShipmentRecord {
            id: "11".to_string(),
            po_number: "PO-11".to_string(),
            transport_type: Some(TransportType::Sea),
            etd: NaiveDate::from_ymd_opt(2025, 7, 14),
            ..Default::default()
        };
        let request = pst_request_for(&record, None);
        assert_eq!(request.transport_type.as_deref(), Some("Sea"));
        assert_eq!(request.etd.as_deref(), Some("2025-07-14"));
        assert_eq!(request.eta, None);
    }
}
