//! Переписка по заказу (комментарии и уведомления)

use crate::shared::lenient::opt_string;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoMessage {
    #[serde(default, deserialize_with = "opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub po_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string", alias = "createdBy")]
    pub author: Option<String>,
    #[serde(default, alias = "message")]
    pub body: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub po_id: String,
    pub body: String,
}
