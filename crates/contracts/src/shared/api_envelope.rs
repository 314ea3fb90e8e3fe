//! Конверт ответа бэкенда JAGOTA.
//!
//! Бэкенд отвечает в двух несовместимых форматах:
//! `{ error, data, message }` и `{ success, data, errors }`.
//! Оба разбираются одним типом; какой формат пришёл, видно по варианту.

use serde::{Deserialize, Serialize};

const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    /// `{ "error": false, "data": ..., "message": "..." }`
    ErrorFlag {
        error: bool,
        data: Option<T>,
        #[serde(default)]
        message: Option<String>,
    },
    /// `{ "success": true, "data": ..., "errors": ["..."] }`
    SuccessFlag {
        success: bool,
        data: Option<T>,
        #[serde(default)]
        errors: Option<Vec<String>>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        ApiEnvelope::SuccessFlag {
            success: true,
            data: Some(data),
            errors: None,
            message: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            ApiEnvelope::ErrorFlag { error, .. } => !error,
            ApiEnvelope::SuccessFlag { success, .. } => *success,
        }
    }

    /// Текст ошибки для пользователя; для успешного ответа `None`
    pub fn failure_message(&self) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        let text = match self {
            ApiEnvelope::ErrorFlag { message, .. } => message.clone(),
            ApiEnvelope::SuccessFlag {
                errors, message, ..
            } => errors
                .as_ref()
                .filter(|e| !e.is_empty())
                .map(|e| e.join("; "))
                .or_else(|| message.clone()),
        };
        Some(
            text.filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
        )
    }

    /// Данные успешного ответа (могут отсутствовать)
    pub fn into_data(self) -> Result<Option<T>, String> {
        if let Some(message) = self.failure_message() {
            return Err(message);
        }
        Ok(match self {
            ApiEnvelope::ErrorFlag { data, .. } => data,
            ApiEnvelope::SuccessFlag { data, .. } => data,
        })
    }
}

impl<T: Default> ApiEnvelope<T> {
    /// Успешный ответ без `data` трактуется как пустой результат
    pub fn into_result_or_default(self) -> Result<T, String> {
        self.into_data().map(Option::unwrap_or_default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_flag_success() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"error": false, "data": [1, 2]}"#).unwrap();
        assert!(env.is_ok());
        assert_eq!(env.into_result_or_default().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_error_flag_failure_uses_message() {
        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"error": true, "message": "PO not found"}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), "PO not found");
    }

    #[test]
    fn test_success_flag_failure_joins_errors() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str(
            r#"{"success": false, "data": null, "errors": ["a", "b"]}"#,
        )
        .unwrap();
        assert_eq!(env.failure_message().as_deref(), Some("a; b"));
    }

    #[test]
    fn test_failure_without_text_has_default_message() {
        let env: ApiEnvelope<i32> = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(env.into_data().unwrap_err(), DEFAULT_FAILURE_MESSAGE);
    }

    /// Тип данных без `Default` тоже разбирается
    #[derive(Debug, PartialEq, Deserialize)]
    struct Token {
        value: String,
    }

    fn decode<T: serde::de::DeserializeOwned>(body: &str) -> ApiEnvelope<T> {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_data_without_default() {
        let env: ApiEnvelope<Token> = decode(r#"{"error": false, "data": {"value": "t1"}}"#);
        assert_eq!(
            env.into_data().unwrap(),
            Some(Token {
                value: "t1".to_string()
            })
        );
        let env: ApiEnvelope<Token> = decode(r#"{"success": true}"#);
        assert_eq!(env.into_data().unwrap(), None);
    }

    #[test]
    fn test_missing_data_defaults() {
        let env: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_result_or_default().unwrap().is_empty());
    }
}
