use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

#[derive(Debug, Clone)]
pub struct RefreshCookieConfig {
    pub name: String,
    pub path: String,
    pub secure: bool,
    pub max_age_in_seconds: i64,
}

impl RefreshCookieConfig {
    /// Cookie carrying a freshly minted refresh token.
    pub fn refresh_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.name.clone(), token))
            .path(self.path.clone())
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.max_age_in_seconds))
            .build()
    }

    /// Cookie instructing the browser to drop the refresh token.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.name.clone(), String::new()))
            .path(self.path.clone())
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_removal();
        cookie
    }

    pub fn extract<'a>(&self, jar: &'a CookieJar) -> Option<&'a str> {
        jar.get(&self.name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }
}
