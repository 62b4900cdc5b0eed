/// BuildEstate Core - Shared library for BuildEstate mail delivery and user provisioning
///
/// This crate contains the mail transport selection, the mail dispatcher,
/// the user store used by the admin seeder, and shared utilities.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::EstateError;
pub use models::{HealthState, HealthStatus, MailConfig, MailOptions, SendInfo, TransportMode};
pub use services::MailDispatcher;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
