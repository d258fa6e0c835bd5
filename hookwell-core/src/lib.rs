pub mod config;
pub mod entry;
pub mod error;

pub use config::ServiceConfig;
pub use entry::{Body, WebhookEntry};
pub use error::HookwellError;
