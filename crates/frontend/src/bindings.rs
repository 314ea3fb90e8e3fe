//! Экспорт ядра во внешний слой представления (JS).
//!
//! Всё передаётся как JSON-совместимые значения через serde-wasm-bindgen;
//! ошибки возвращаются строкой.

use chrono::NaiveDate;
use contracts::dashboards::d400_shipment_summary::DashboardSummaryResponse;
use contracts::domain::a001_shipment::{PoListItemDto, PoListQuery, ShipmentRecord};
use contracts::domain::a002_psw_expense::{ExpenseCode, ExpenseCodeTable, ExpenseLineItem};
use contracts::shared::dates::parse_iso_date;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

use crate::dashboards::d400_shipment_summary::api::load_summary;
use crate::dashboards::d400_shipment_summary::{aggregate, resolve_kpi, SummaryState};
use crate::domain::a001_shipment::api::{
    create_pst, create_psw, fetch_po_list, normalize_po_list, pst_request_for,
};
use crate::domain::a001_shipment::filter::filter_options;
use crate::domain::a001_shipment::{filter_shipments, ShipmentFilter, ShipmentStore};
use crate::domain::a002_psw_expense::api::{
    fetch_expense_code_list, fetch_expense_codes, submit_expenses,
};
use crate::domain::a002_psw_expense::{recalculate, ExpenseField, ExpenseFormState};
use crate::domain::a003_reference::{fetch_countries, fetch_service_providers};
use crate::domain::a004_message::{fetch_messages, post_message};
use crate::shared::api_utils::ApiError;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{date_range, today_local, DateFilterMode};
use crate::shared::export::{build_csv, export_to_excel, export_to_json};
use crate::shared::number_format;
use crate::system::auth::api::get_current_user;
use crate::system::auth::context::{do_login, do_logout};
use crate::system::auth::AuthContext;

fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// `today` из JS ("YYYY-MM-DD"); без него берётся локальная дата
fn resolve_today(today: Option<String>) -> NaiveDate {
    today
        .as_deref()
        .and_then(parse_iso_date)
        .unwrap_or_else(today_local)
}

#[wasm_bindgen(js_name = normalizePoList)]
pub fn normalize_po_list_js(rows: JsValue) -> Result<JsValue, JsValue> {
    let rows: Vec<PoListItemDto> = from_js(rows, "PO list")?;
    to_js(&normalize_po_list(rows))
}

#[wasm_bindgen(js_name = filterShipments)]
pub fn filter_shipments_js(
    records: JsValue,
    filter: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsValue> {
    let records: Vec<ShipmentRecord> = from_js(records, "records")?;
    let filter: ShipmentFilter = if filter.is_null() || filter.is_undefined() {
        ShipmentFilter::default()
    } else {
        from_js(filter, "filter")?
    };
    to_js(&filter_shipments(&records, &filter, resolve_today(today)))
}

#[wasm_bindgen(js_name = aggregateKpi)]
pub fn aggregate_kpi_js(records: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    let records: Vec<ShipmentRecord> = from_js(records, "records")?;
    to_js(&aggregate(&records, resolve_today(today)))
}

/// `summary` = null/undefined, пока сводка грузится или если она упала
fn summary_state(summary: JsValue) -> Result<SummaryState, JsValue> {
    if summary.is_null() || summary.is_undefined() {
        Ok(SummaryState::Loading)
    } else {
        from_js::<DashboardSummaryResponse>(summary, "summary").map(SummaryState::Loaded)
    }
}

#[wasm_bindgen(js_name = resolveKpi)]
pub fn resolve_kpi_js(
    summary: JsValue,
    records: JsValue,
    today: Option<String>,
) -> Result<JsValue, JsValue> {
    let state = summary_state(summary)?;
    let records: Vec<ShipmentRecord> = from_js(records, "records")?;
    to_js(&resolve_kpi(&state, &records, resolve_today(today)))
}

#[wasm_bindgen(js_name = newExpenseItem)]
pub fn new_expense_item_js() -> Result<JsValue, JsValue> {
    to_js(&ExpenseLineItem::new())
}

fn parse_expense_field(field: &str) -> Result<ExpenseField, JsValue> {
    serde_json::from_value(serde_json::Value::String(field.to_string()))
        .map_err(|_| JsValue::from_str(&format!("Unknown expense field: {}", field)))
}

fn parse_line_id(line_id: &str) -> Result<Uuid, JsValue> {
    Uuid::parse_str(line_id.trim())
        .map_err(|e| JsValue::from_str(&format!("Invalid line id {}: {}", line_id, e)))
}

#[wasm_bindgen(js_name = recalculateExpense)]
pub fn recalculate_expense_js(
    item: JsValue,
    field: &str,
    value: &str,
    codes: JsValue,
) -> Result<JsValue, JsValue> {
    let item: ExpenseLineItem = from_js(item, "expense line")?;
    let field = parse_expense_field(field)?;
    let codes: Vec<ExpenseCode> = if codes.is_null() || codes.is_undefined() {
        Vec::new()
    } else {
        from_js(codes, "expense codes")?
    };
    let table = ExpenseCodeTable::new(codes);
    to_js(&recalculate(&item, field, value, &table))
}

#[wasm_bindgen(js_name = dateRangeFor)]
pub fn date_range_for_js(mode: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    let mode: DateFilterMode = from_js(mode, "date filter")?;
    to_js(&date_range(&mode, resolve_today(today)))
}

/// Варианты для панели фильтров: виды транспорта и статусы
#[wasm_bindgen(js_name = filterOptions)]
pub fn filter_options_js() -> Result<JsValue, JsValue> {
    to_js(&filter_options())
}

#[wasm_bindgen(js_name = formatAmount)]
pub fn format_amount_js(value: f64) -> String {
    number_format::format_amount(value)
}

#[wasm_bindgen(js_name = exportShipmentsCsv)]
pub fn export_shipments_csv_js(records: JsValue) -> Result<String, JsValue> {
    let records: Vec<ShipmentRecord> = from_js(records, "records")?;
    build_csv(&records).map_err(|e| JsValue::from_str(&e))
}

/// Скачать отфильтрованный список: `format` = "csv" или "json"
#[wasm_bindgen(js_name = downloadShipments)]
pub fn download_shipments_js(records: JsValue, format: &str, filename: &str) -> Result<(), JsValue> {
    let records: Vec<ShipmentRecord> = from_js(records, "records")?;
    let result = match format {
        "json" => export_to_json(&records, filename),
        _ => export_to_excel(&records, filename),
    };
    result.map_err(|e| JsValue::from_str(&e))
}

// --- обращения к бэкенду; контекст собирается из сохранённого токена ---

fn session() -> AuthContext {
    AuthContext::from_storage(AppConfig::load())
}

fn api_err(e: ApiError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(js_name = signIn)]
pub async fn sign_in_js(username: String, password: String) -> Result<JsValue, JsValue> {
    let ctx = do_login(&session(), username, password).await.map_err(api_err)?;
    to_js(&ctx.user_info())
}

#[wasm_bindgen(js_name = signOut)]
pub fn sign_out_js() {
    do_logout(&session());
}

#[wasm_bindgen(js_name = currentUser)]
pub async fn current_user_js() -> Result<JsValue, JsValue> {
    let user = get_current_user(&session()).await.map_err(api_err)?;
    to_js(&user)
}

thread_local! {
    static SHIPMENTS: RefCell<ShipmentStore> = RefCell::new(ShipmentStore::new());
    static EXPENSE_FORM: RefCell<ExpenseFormState> = RefCell::new(ExpenseFormState::default());
}

fn shipments_view() -> Result<JsValue, JsValue> {
    SHIPMENTS.with(|store| to_js(&store.borrow().view()))
}

fn expense_form_view() -> Result<JsValue, JsValue> {
    EXPENSE_FORM.with(|form| to_js(&form.borrow().view()))
}

/// Загрузить список PO (повтор с теми же параметрами пропускается).
/// Возвращает `{ records, isLoading, isLoaded, error }`; при ошибке
/// остаётся последний удачный список.
#[wasm_bindgen(js_name = loadPoList)]
pub async fn load_po_list_js(query: JsValue) -> Result<JsValue, JsValue> {
    let query: PoListQuery = if query.is_null() || query.is_undefined() {
        PoListQuery::default()
    } else {
        from_js(query, "PO list query")?
    };
    let started = SHIPMENTS.with(|store| store.borrow_mut().begin_fetch(&query));
    if started {
        let result = fetch_po_list(&session(), &query).await;
        SHIPMENTS.with(|store| store.borrow_mut().apply(query, result));
    }
    shipments_view()
}

/// Загруженный список после фильтра и сортировки
#[wasm_bindgen(js_name = visibleShipments)]
pub fn visible_shipments_js(filter: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    let filter: ShipmentFilter = if filter.is_null() || filter.is_undefined() {
        ShipmentFilter::default()
    } else {
        from_js(filter, "filter")?
    };
    let today = resolve_today(today);
    SHIPMENTS.with(|store| to_js(&store.borrow().visible(&filter, today)))
}

/// KPI по загруженному списку: сводка, если она есть, иначе локальный расчёт
#[wasm_bindgen(js_name = shipmentKpi)]
pub fn shipment_kpi_js(summary: JsValue, today: Option<String>) -> Result<JsValue, JsValue> {
    let state = summary_state(summary)?;
    let today = resolve_today(today);
    SHIPMENTS.with(|store| to_js(&resolve_kpi(&state, store.borrow().records(), today)))
}

/// Сводка дашборда; `null`, если загрузить не удалось
#[wasm_bindgen(js_name = fetchDashboardSummary)]
pub async fn fetch_dashboard_summary_js() -> Result<JsValue, JsValue> {
    match load_summary(&session()).await {
        SummaryState::Loaded(summary) => to_js(&summary),
        SummaryState::Loading | SummaryState::Failed(_) => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen(js_name = createPst)]
pub async fn create_pst_js(record: JsValue, remark: Option<String>) -> Result<JsValue, JsValue> {
    let record: ShipmentRecord = from_js(record, "record")?;
    let request = pst_request_for(&record, remark);
    let created = create_pst(&session(), &request).await.map_err(api_err)?;
    SHIPMENTS.with(|store| store.borrow_mut().invalidate());
    to_js(&created)
}

#[wasm_bindgen(js_name = createPsw)]
pub async fn create_psw_js(
    record: JsValue,
    service_provider_code: Option<String>,
    remark: Option<String>,
) -> Result<JsValue, JsValue> {
    let record: ShipmentRecord = from_js(record, "record")?;
    let created = create_psw(&session(), &record, service_provider_code, remark)
        .await
        .map_err(api_err)?;
    SHIPMENTS.with(|store| store.borrow_mut().invalidate());
    to_js(&created)
}

#[wasm_bindgen(js_name = fetchExpenseCodes)]
pub async fn fetch_expense_codes_js() -> Result<JsValue, JsValue> {
    to_js(&fetch_expense_code_list(&session()).await.map_err(api_err)?)
}

/// Новая форма расходов PSW со свежим справочником кодов
#[wasm_bindgen(js_name = openExpenseForm)]
pub async fn open_expense_form_js() -> Result<JsValue, JsValue> {
    let codes = fetch_expense_codes(&session()).await.map_err(api_err)?;
    EXPENSE_FORM.with(|form| *form.borrow_mut() = ExpenseFormState::new(codes));
    expense_form_view()
}

#[wasm_bindgen(js_name = addExpenseLine)]
pub fn add_expense_line_js() -> Result<JsValue, JsValue> {
    EXPENSE_FORM.with(|form| form.borrow_mut().add_item());
    expense_form_view()
}

/// Изменения после отправки игнорируются
#[wasm_bindgen(js_name = editExpenseLine)]
pub fn edit_expense_line_js(line_id: &str, field: &str, value: &str) -> Result<JsValue, JsValue> {
    let line_id = parse_line_id(line_id)?;
    let field = parse_expense_field(field)?;
    EXPENSE_FORM.with(|form| {
        form.borrow_mut().edit(line_id, field, value);
    });
    expense_form_view()
}

#[wasm_bindgen(js_name = removeExpenseLine)]
pub fn remove_expense_line_js(line_id: &str) -> Result<JsValue, JsValue> {
    let line_id = parse_line_id(line_id)?;
    EXPENSE_FORM.with(|form| form.borrow_mut().remove(line_id));
    expense_form_view()
}

/// Отправить все строки формы; после успеха форма только для чтения
#[wasm_bindgen(js_name = submitExpenseForm)]
pub async fn submit_expense_form_js(
    po_id: String,
    psw_number: Option<String>,
) -> Result<JsValue, JsValue> {
    let request = EXPENSE_FORM
        .with(|form| form.borrow().submission(&po_id, psw_number.as_deref()))
        .ok_or_else(|| JsValue::from_str("Nothing to submit"))?;
    let created = submit_expenses(&session(), &request).await.map_err(api_err)?;
    EXPENSE_FORM.with(|form| form.borrow_mut().mark_submitted());
    to_js(&created)
}

#[wasm_bindgen(js_name = fetchCountries)]
pub async fn fetch_countries_js() -> Result<JsValue, JsValue> {
    to_js(&fetch_countries(&session()).await.map_err(api_err)?)
}

#[wasm_bindgen(js_name = fetchServiceProviders)]
pub async fn fetch_service_providers_js() -> Result<JsValue, JsValue> {
    to_js(&fetch_service_providers(&session()).await.map_err(api_err)?)
}

#[wasm_bindgen(js_name = fetchMessages)]
pub async fn fetch_messages_js(po_id: String) -> Result<JsValue, JsValue> {
    to_js(&fetch_messages(&session(), &po_id).await.map_err(api_err)?)
}

#[wasm_bindgen(js_name = postPoMessage)]
pub async fn post_message_js(po_id: String, body: String) -> Result<JsValue, JsValue> {
    to_js(&post_message(&session(), &po_id, &body).await.map_err(api_err)?)
}
