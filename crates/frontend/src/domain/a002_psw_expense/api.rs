use contracts::domain::a002_psw_expense::{ExpenseCode, ExpenseCodeTable, SubmitExpensesRequest};
use contracts::domain::a001_shipment::DocumentCreatedResponse;

use crate::shared::api_utils::{get_data, post_authenticated, ApiResult};
use crate::system::auth::AuthContext;

pub async fn fetch_expense_code_list(ctx: &AuthContext) -> ApiResult<Vec<ExpenseCode>> {
    let codes: Vec<ExpenseCode> = get_data(ctx, "/api/psw/expense-codes").await?;
    log::debug!("Loaded {} expense codes", codes.len());
    Ok(codes)
}

/// Справочник кодов расходов со ставками НДС
pub async fn fetch_expense_codes(ctx: &AuthContext) -> ApiResult<ExpenseCodeTable> {
    fetch_expense_code_list(ctx).await.map(ExpenseCodeTable::new)
}

/// Отправить строки расходов PSW; без входа не отправляется
pub async fn submit_expenses(
    ctx: &AuthContext,
    request: &SubmitExpensesRequest,
) -> ApiResult<DocumentCreatedResponse> {
    log::info!(
        "Submitting {} expense lines for PO {}",
        request.items.len(),
        request.po_id
    );
    post_authenticated(ctx, "/api/psw/expenses", request).await
}
