pub mod settings;

pub use settings::{
    AllowedOrigins, ApplicationSetting, AuthServiceSetting, AuthSetting, JwtSetting,
    PostgresSetting, RefreshCookieSetting,
};
