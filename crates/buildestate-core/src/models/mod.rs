/// Domain models
pub mod config;
pub mod mail;
pub mod user;

pub use config::*;
pub use mail::*;
pub use user::*;
