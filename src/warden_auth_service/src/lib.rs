pub mod auth_server;
pub mod helpers;
pub mod tracing;

pub use auth_server::AuthServer;
pub use helpers::{configure_postgresql, get_postgres_pool, refresh_cookie_config};
