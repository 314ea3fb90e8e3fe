pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod list_utils;
pub mod number_format;
