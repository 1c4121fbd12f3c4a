use color_eyre::eyre::Result;
use tokio::net::TcpListener;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use warden_adapters::{
    Argon2PasswordHasher, AuthServiceSetting, JwtTokenCodec, PostgresAccountStore, SystemClock,
};
use warden_application::AuthService;
use warden_auth_service::{AuthServer, configure_postgresql, refresh_cookie_config};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    init_tracing()?;

    let setting = AuthServiceSetting::load()?;

    let pg_pool = configure_postgresql(&setting.postgres).await?;
    let account_store = PostgresAccountStore::new(pg_pool);
    let token_codec = JwtTokenCodec::new(setting.auth.jwt.to_jwt_config())?;

    let auth_service = AuthService::new(
        account_store.clone(),
        account_store,
        Argon2PasswordHasher,
        token_codec,
        SystemClock,
    );
    let server = AuthServer::new(auth_service, refresh_cookie_config(&setting));

    let allowed_origins = setting.auth.allowed_origins.clone();
    let allowed_origins = (!allowed_origins.is_empty()).then_some(allowed_origins);

    let listener = TcpListener::bind(&setting.application.address).await?;
    server.run_standalone(listener, allowed_origins).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
