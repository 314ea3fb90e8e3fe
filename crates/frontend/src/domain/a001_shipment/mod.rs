pub mod api;
pub mod export;
pub mod filter;
pub mod state;

pub use filter::{filter_shipments, ShipmentFilter, SortMode};
pub use state::ShipmentStore;
