//! Справочники: страны и поставщики услуг (брокеры, перевозчики)

use crate::shared::lenient::opt_string;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(alias = "countryCode")]
    pub code: String,
    #[serde(default, deserialize_with = "opt_string", alias = "countryName")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    #[serde(alias = "providerCode")]
    pub code: String,
    #[serde(default, deserialize_with = "opt_string", alias = "providerName")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string")]
    pub tax_id: Option<String>,
}
