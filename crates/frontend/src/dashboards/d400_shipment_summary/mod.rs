pub mod api;
pub mod kpi;

pub use kpi::{aggregate, resolve_kpi, SummaryState};
