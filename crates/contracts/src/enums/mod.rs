pub mod transport_type;
pub mod workflow_status;

pub use transport_type::{PoType, TransportType};
pub use workflow_status::WorkflowStatus;
