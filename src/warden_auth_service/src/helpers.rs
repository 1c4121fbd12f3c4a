use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use warden_adapters::{AuthServiceSetting, config::PostgresSetting};
use warden_axum::RefreshCookieConfig;

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured URL and pool size, then runs all pending
/// migrations.
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret(), setting.max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
/// * `max_connections` - Upper bound on pooled connections
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Refresh cookie attributes; Max-Age follows the refresh token TTL.
pub fn refresh_cookie_config(setting: &AuthServiceSetting) -> RefreshCookieConfig {
    let cookie = &setting.auth.refresh_cookie;
    RefreshCookieConfig {
        name: cookie.name.clone(),
        path: cookie.path.clone(),
        secure: cookie.secure,
        max_age_in_seconds: setting.auth.jwt.refresh_token_ttl_in_seconds,
    }
}
