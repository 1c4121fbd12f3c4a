use config::{Config, ConfigError, Environment, File};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use crate::token::JwtConfig;

pub const DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS: i64 = 30 * 60;
pub const DEFAULT_REFRESH_TOKEN_TTL_IN_SECONDS: i64 = 14 * 24 * 60 * 60;

/// Service configuration: `config/base.json` when present, overlaid by
/// `WARDEN__SECTION__KEY` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    #[serde(default)]
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    pub postgres: PostgresSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ApplicationSetting {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
    #[serde(default)]
    pub refresh_cookie: RefreshCookieSetting,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl_in_seconds: i64,
    #[serde(default = "default_refresh_token_ttl")]
    pub refresh_token_ttl_in_seconds: i64,
}

impl JwtSetting {
    pub fn to_jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.secret.clone(),
            access_token_ttl_in_seconds: self.access_token_ttl_in_seconds,
            refresh_token_ttl_in_seconds: self.refresh_token_ttl_in_seconds,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshCookieSetting {
    pub name: String,
    pub path: String,
    pub secure: bool,
}

impl Default for RefreshCookieSetting {
    fn default() -> Self {
        Self {
            name: "refresh_token".to_owned(),
            path: "/api/auth".to_owned(),
            secure: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Origins allowed to call the API from a browser. Empty means same-origin only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "OriginList")]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            origins
                .into_iter()
                .filter_map(|origin| HeaderValue::from_str(origin.as_ref().trim()).ok())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Either a JSON array or a comma separated string (as env vars arrive).
#[derive(Deserialize)]
#[serde(untagged)]
enum OriginList {
    List(Vec<String>),
    Joined(String),
}

impl From<OriginList> for AllowedOrigins {
    fn from(list: OriginList) -> Self {
        match list {
            OriginList::List(origins) => AllowedOrigins::new(origins),
            OriginList::Joined(joined) => {
                AllowedOrigins::new(joined.split(',').filter(|s| !s.trim().is_empty()))
            }
        }
    }
}

impl AuthServiceSetting {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/base").required(false))
            .add_source(
                Environment::with_prefix("WARDEN")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

fn default_address() -> String {
    "0.0.0.0:3000".to_owned()
}

fn default_access_token_ttl() -> i64 {
    DEFAULT_ACCESS_TOKEN_TTL_IN_SECONDS
}

fn default_refresh_token_ttl() -> i64 {
    DEFAULT_REFRESH_TOKEN_TTL_IN_SECONDS
}

fn default_max_connections() -> u32 {
    5
}
