use contracts::domain::a004_message::{PoMessage, PostMessageRequest};

use crate::shared::api_utils::{get_data, post_authenticated, query_string, ApiError, ApiResult};
use crate::system::auth::AuthContext;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageQuery<'a> {
    po_id: &'a str,
}

/// Сообщение без текста не отправляется
pub fn message_request(po_id: &str, body: &str) -> ApiResult<PostMessageRequest> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ApiError::Rejected("Message is empty".to_string()));
    }
    Ok(PostMessageRequest {
        po_id: po_id.to_string(),
        body: body.to_string(),
    })
}

pub async fn fetch_messages(ctx: &AuthContext, po_id: &str) -> ApiResult<Vec<PoMessage>> {
    let qs = query_string(&MessageQuery { po_id })?;
    get_data(ctx, &format!("/api/po/messages{}", qs)).await
}

pub async fn post_message(ctx: &AuthContext, po_id: &str, body: &str) -> ApiResult<PoMessage> {
    let request = message_request(po_id, body)?;
    post_authenticated(ctx, "/api/po/messages", &request).await
}
