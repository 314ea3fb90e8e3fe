use chrono::NaiveDate;
use contracts::domain::a001_shipment::{PoListQuery, ShipmentRecord};
use serde::Serialize;

use super::filter::{filter_shipments, ShipmentFilter};
use crate::shared::api_utils::ApiResult;

/// Клиентский снимок списка PO.
///
/// Хранит последний успешно загруженный список: ошибка загрузки его не
/// стирает, а новый успешный ответ целиком заменяет (побеждает последний).
/// Повторный запрос с теми же параметрами пропускается, в том числе пока
/// такой же запрос ещё в полёте.
#[derive(Clone, Debug, Default)]
pub struct ShipmentStore {
    records: Vec<ShipmentRecord>,
    last_query: Option<PoListQuery>,
    pending_query: Option<PoListQuery>,
    error: Option<String>,
}

/// Состояние списка для слоя представления
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentListView<'a> {
    pub records: &'a [ShipmentRecord],
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<&'a str>,
}

impl ShipmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ShipmentRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.pending_query.is_some()
    }

    pub fn is_loaded(&self) -> bool {
        self.last_query.is_some()
    }

    /// Текст последней ошибки загрузки
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn view(&self) -> ShipmentListView<'_> {
        ShipmentListView {
            records: &self.records,
            is_loading: self.is_loading(),
            is_loaded: self.is_loaded(),
            error: self.error(),
        }
    }

    /// Нужно ли идти на бэкенд с этими параметрами
    pub fn needs_fetch(&self, query: &PoListQuery) -> bool {
        self.last_query.as_ref() != Some(query) && self.pending_query.as_ref() != Some(query)
    }

    /// Отметить начало загрузки. `false` — запрос не нужен, идти на бэкенд не надо.
    pub fn begin_fetch(&mut self, query: &PoListQuery) -> bool {
        if !self.needs_fetch(query) {
            log::debug!("PO list already loaded for {:?}, skipping fetch", query);
            return false;
        }
        self.pending_query = Some(query.clone());
        true
    }

    /// Применить результат загрузки
    pub fn apply(&mut self, query: PoListQuery, result: ApiResult<Vec<ShipmentRecord>>) {
        if self.pending_query.as_ref() == Some(&query) {
            self.pending_query = None;
        }
        match result {
            Ok(records) => {
                log::info!("Shipment snapshot replaced: {} records", records.len());
                self.records = records;
                self.last_query = Some(query);
                self.error = None;
            }
            Err(e) => {
                log::warn!(
                    "PO list load failed, keeping {} cached records: {}",
                    self.records.len(),
                    e
                );
                self.error = Some(e.to_string());
            }
        }
    }

    /// Сбросить защиту от повтора: после создания PST/PSW список нужно перечитать
    pub fn invalidate(&mut self) {
        self.last_query = None;
    }

    /// Отфильтрованный и отсортированный список для таблицы
    pub fn visible(&self, filter: &ShipmentFilter, today: NaiveDate) -> Vec<ShipmentRecord> {
        filter_shipments(&self.records, filter, today)
    }
}
