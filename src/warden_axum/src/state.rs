use std::sync::Arc;

use warden_application::AuthLifecycle;

use crate::cookies::RefreshCookieConfig;

/// Shared by every route.
pub struct ApiState<L> {
    pub auth: Arc<L>,
    pub cookies: RefreshCookieConfig,
}

impl<L: AuthLifecycle> ApiState<L> {
    pub fn new(auth: L, cookies: RefreshCookieConfig) -> Self {
        Self {
            auth: Arc::new(auth),
            cookies,
        }
    }
}

// Manual impl: `L` itself need not be `Clone`.
impl<L> Clone for ApiState<L> {
    fn clone(&self) -> Self {
        Self {
            auth: Arc::clone(&self.auth),
            cookies: self.cookies.clone(),
        }
    }
}
