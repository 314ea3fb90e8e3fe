//! API utilities for frontend-backend communication
//!
//! Every call takes the injected [`AuthContext`]: base URL and timeout come
//! from its config, the bearer token (if any) is attached to each request.
//! Responses are decoded through [`ApiEnvelope`], which accepts both
//! backend conventions.

use contracts::shared::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortController;

use crate::system::auth::context::AuthContext;

/// Ошибки обращения к бэкенду; `Display` показывается пользователю
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Бэкенд ответил конвертом с ошибкой, либо действие запрещено процессом
    #[error("{0}")]
    Rejected(String),

    #[error("You must be signed in to perform this action")]
    Unauthenticated,
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Query string ("?a=1&b=2") from a serializable struct; empty when no fields are set
pub fn query_string<Q: Serialize>(query: &Q) -> ApiResult<String> {
    let encoded =
        serde_qs::to_string(query).map_err(|e| ApiError::Parse(format!("query: {}", e)))?;
    if encoded.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("?{}", encoded))
    }
}

/// Decode a response body into an envelope of either convention
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> ApiResult<ApiEnvelope<T>> {
    serde_json::from_str::<ApiEnvelope<T>>(body).map_err(|e| {
        log::warn!("Response matches neither envelope convention: {}", e);
        ApiError::Parse(e.to_string())
    })
}

/// Data of a successful envelope; a missing `data` is an error
pub fn envelope_data<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    decode_envelope::<T>(body)?
        .into_data()
        .map_err(ApiError::Rejected)?
        .ok_or_else(|| ApiError::Parse("response has no data".to_string()))
}

/// Data of a successful envelope; a missing `data` becomes `T::default()`
pub fn envelope_data_or_default<T: DeserializeOwned + Default>(body: &str) -> ApiResult<T> {
    decode_envelope::<T>(body)?
        .into_result_or_default()
        .map_err(ApiError::Rejected)
}

/// Ошибка запроса, прерванного таймером, — это таймаут, на какой бы стадии он ни сработал
fn transport_error(aborted: bool, timeout_ms: u32, error: ApiError) -> ApiError {
    if aborted {
        ApiError::Timeout(timeout_ms)
    } else {
        error
    }
}

fn with_auth(builder: RequestBuilder, ctx: &AuthContext) -> RequestBuilder {
    match ctx.bearer_header() {
        Some(header) => builder.header("Authorization", &header),
        None => builder,
    }
}

async fn execute(
    ctx: &AuthContext,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> ApiResult<String> {
    let url = ctx.config().api_url(path);
    let timeout_ms = ctx.config().api.timeout_ms;
    log::debug!("{} {}", method.as_str(), url);

    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
    };
    let mut builder = with_auth(builder.header("Accept", "application/json"), ctx);

    // Запрос прерывается по таймеру; таймер живёт до конца функции
    let controller = if timeout_ms > 0 {
        Some(AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?)
    } else {
        None
    };
    if let Some(controller) = &controller {
        builder = builder.abort_signal(Some(&controller.signal()));
    }
    let _timer = controller.clone().map(|controller| {
        Timeout::new(timeout_ms, move || controller.abort())
    });

    let request = match body {
        Some(payload) => builder
            .json(&payload)
            .map_err(|e| ApiError::Parse(format!("request body: {}", e)))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let aborted = || {
        controller
            .as_ref()
            .map(|c| c.signal().aborted())
            .unwrap_or(false)
    };

    let response = request.send().await.map_err(|e| {
        log::warn!("{} {} failed: {}", method.as_str(), path, e);
        transport_error(aborted(), timeout_ms, ApiError::Network(e.to_string()))
    })?;

    let status = response.status();
    // таймер ещё взведён, пока читается тело
    let text = response.text().await.map_err(|e| {
        log::warn!("{} {} body read failed: {}", method.as_str(), path, e);
        transport_error(aborted(), timeout_ms, ApiError::Parse(e.to_string()))
    })?;

    if !response.ok() {
        log::warn!("{} {} -> HTTP {}", method.as_str(), path, status);
        return Err(ApiError::Http { status, body: text });
    }

    Ok(text)
}

/// GET a list-like resource; a successful response without `data` is empty
pub async fn get_data<T: DeserializeOwned + Default>(
    ctx: &AuthContext,
    path: &str,
) -> ApiResult<T> {
    let body = execute(ctx, Method::Get, path, None).await?;
    envelope_data_or_default(&body)
}

/// GET a single resource; a successful response without `data` is an error
pub async fn get_one<T: DeserializeOwned>(ctx: &AuthContext, path: &str) -> ApiResult<T> {
    let body = execute(ctx, Method::Get, path, None).await?;
    envelope_data(&body)
}

/// POST that needs a signed-in user; fails before sending without a token
pub async fn post_authenticated<B: Serialize, T: DeserializeOwned + Default>(
    ctx: &AuthContext,
    path: &str,
    payload: &B,
) -> ApiResult<T> {
    ctx.require_token()?;
    let value =
        serde_json::to_value(payload).map_err(|e| ApiError::Parse(format!("request body: {}", e)))?;
    let body = execute(ctx, Method::Post, path, Some(value)).await?;
    envelope_data_or_default(&body)
}

/// POST without authentication (login)
pub async fn post_public<B: Serialize, T: DeserializeOwned>(
    ctx: &AuthContext,
    path: &str,
    payload: &B,
) -> ApiResult<T> {
    let value =
        serde_json::to_value(payload).map_err(|e| ApiError::Parse(format!("request body: {}", e)))?;
    let body = execute(ctx, Method::Post, path, Some(value)).await?;
    envelope_data(&body)
}
