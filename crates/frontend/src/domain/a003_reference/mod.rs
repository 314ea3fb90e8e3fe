pub mod api;

pub use api::{fetch_countries, fetch_service_providers};
