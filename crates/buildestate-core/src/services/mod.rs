/// Mail transports, dispatching, and user persistence services
pub mod config;
pub mod dispatcher;
pub mod dummy;
pub mod password;
pub mod selector;
pub mod smtp;
pub mod transport;
pub mod users;

// Re-export service types
pub use dispatcher::MailDispatcher;
pub use dummy::DummyMailTransport;
pub use password::{hash_password, verify_password};
pub use selector::{select_transport, spawn_startup_verification};
pub use smtp::SmtpMailTransport;
pub use transport::MailTransport;
pub use users::{InMemoryUserStore, MongoUserStore, UserStore};
