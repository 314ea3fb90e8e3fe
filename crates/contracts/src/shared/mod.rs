pub mod api_envelope;
pub mod dates;
pub mod lenient;

pub use api_envelope::ApiEnvelope;
