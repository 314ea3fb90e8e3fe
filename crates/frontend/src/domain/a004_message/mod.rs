pub mod api;

pub use api::{fetch_messages, post_message};
