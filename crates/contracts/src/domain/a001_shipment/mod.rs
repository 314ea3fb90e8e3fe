pub mod aggregate;
pub mod dto;
pub mod request;

pub use aggregate::ShipmentRecord;
pub use dto::PoListItemDto;
pub use request::{CreatePstRequest, CreatePswRequest, DocumentCreatedResponse, PoListQuery};
