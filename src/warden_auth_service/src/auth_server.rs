use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{delete, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use warden_adapters::AllowedOrigins;
use warden_application::AuthLifecycle;
use warden_axum::{
    ApiState, RefreshCookieConfig,
    routes::{refresh, sign_in, sign_out, sign_up, withdraw_member},
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the account and session lifecycle, mounted under `/api`.
pub struct AuthServer {
    router: Router,
}

impl AuthServer {
    /// Build the router for `auth`
    ///
    /// # Arguments
    /// * `auth` - Lifecycle implementation every route delegates to
    /// * `cookies` - Attributes of the refresh token cookie
    pub fn new<L>(auth: L, cookies: RefreshCookieConfig) -> Self
    where
        L: AuthLifecycle,
    {
        let state = ApiState::new(auth, cookies);

        let router = Router::new()
            .route("/api/auth/sign-up", post(sign_up::<L>))
            .route("/api/auth/sign-in", post(sign_in::<L>))
            .route("/api/auth/refresh", post(refresh::<L>))
            .route("/api/auth/sign-out", post(sign_out::<L>))
            .route("/api/members/{id}", delete(withdraw_member::<L>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the server into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::POST, Method::DELETE])
                .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server on `listener`
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth server listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
