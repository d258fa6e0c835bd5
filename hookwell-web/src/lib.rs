pub mod handlers;
pub mod server;
pub mod templates;

pub use server::{AppState, build_router};
