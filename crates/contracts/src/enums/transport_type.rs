use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Вид транспорта отгрузки
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportType {
    Air,
    Sea,
    Land,
    /// Код, неизвестный клиенту; хранится как пришёл
    Other(String),
}

impl TransportType {
    /// Внутренний код ("Air" / "Sea" / "Land")
    pub fn code(&self) -> &str {
        match self {
            TransportType::Air => "Air",
            TransportType::Sea => "Sea",
            TransportType::Land => "Land",
            TransportType::Other(code) => code,
        }
    }

    /// Человекочитаемое название для фильтров
    pub fn display_name(&self) -> &str {
        match self {
            TransportType::Air => "Air Freight",
            TransportType::Sea => "Sea Freight",
            TransportType::Land => "Land Freight",
            TransportType::Other(code) => code,
        }
    }

    pub fn all() -> Vec<TransportType> {
        vec![TransportType::Air, TransportType::Sea, TransportType::Land]
    }

    /// Парсинг кода бэкенда (без учёта регистра)
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "air" | "a" => TransportType::Air,
            "sea" | "s" => TransportType::Sea,
            "land" | "l" | "truck" => TransportType::Land,
            _ => TransportType::Other(code.trim().to_string()),
        }
    }
}

impl From<String> for TransportType {
    fn from(value: String) -> Self {
        TransportType::from_code(&value)
    }
}

impl From<TransportType> for String {
    fn from(value: TransportType) -> Self {
        value.code().to_string()
    }
}

/// Подписи категорий из фильтра -> внутренний код вида транспорта
static LABEL_TO_CODE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sea freight", "Sea"),
        ("ocean freight", "Sea"),
        ("sea", "Sea"),
        ("air freight", "Air"),
        ("air", "Air"),
        ("land freight", "Land"),
        ("land transport", "Land"),
        ("truck", "Land"),
        ("land", "Land"),
    ])
});

/// Код вида транспорта для подписи категории.
/// `None` означает, что подпись не из таблицы и сравнивается буквально.
pub fn code_for_label(label: &str) -> Option<&'static str> {
    LABEL_TO_CODE
        .get(label.trim().to_lowercase().as_str())
        .copied()
}

/// Тип заказа: одиночный или сборный (co-load)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoType {
    Single,
    CoLoad,
    Other(String),
}

impl PoType {
    pub fn code(&self) -> &str {
        match self {
            PoType::Single => "Single",
            PoType::CoLoad => "Co-load",
            PoType::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "single" => PoType::Single,
            "co-load" | "coload" | "co_load" | "co load" => PoType::CoLoad,
            _ => PoType::Other(code.trim().to_string()),
        }
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, PoType::CoLoad)
    }
}

impl From<String> for PoType {
    fn from(value: String) -> Self {
        PoType::from_code(&value)
    }
}

impl From<PoType> for String {
    fn from(value: PoType) -> Self {
        value.code().to_string()
    }
}
