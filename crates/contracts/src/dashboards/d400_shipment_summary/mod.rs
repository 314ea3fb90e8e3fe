pub mod dto;

pub use dto::{DashboardSummaryResponse, KpiSnapshot};
