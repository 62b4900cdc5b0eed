/// Outbound message handling
pub mod composer;

pub use composer::{ComposedMessage, compose_message};
