use secrecy::Secret;
use serde_json::json;
use tokio::net::TcpListener;
use warden_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtConfig, JwtTokenCodec, SystemClock,
};
use warden_application::AuthService;
use warden_auth_service::AuthServer;
use warden_axum::RefreshCookieConfig;
use warden_core::TokenPair;

pub const REFRESH_COOKIE: &str = "refresh_token";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub account_store: HashMapAccountStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let account_store = HashMapAccountStore::new();
        let token_codec = JwtTokenCodec::new(JwtConfig {
            secret: Secret::from("api-test-secret".to_owned()),
            access_token_ttl_in_seconds: 60,
            refresh_token_ttl_in_seconds: 600,
        })
        .unwrap();
        let auth_service = AuthService::new(
            account_store.clone(),
            account_store.clone(),
            Argon2PasswordHasher,
            token_codec,
            SystemClock,
        );
        // Plain HTTP in tests, so the cookie must not be marked Secure or the
        // client would never send it back.
        let cookies = RefreshCookieConfig {
            name: REFRESH_COOKIE.to_owned(),
            path: "/api/auth".to_owned(),
            secure: false,
            max_age_in_seconds: 600,
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        let server = AuthServer::new(auth_service, cookies);
        tokio::spawn(server.run_standalone(listener, None));

        let http_client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap();

        Self {
            address,
            http_client,
            account_store,
        }
    }

    /// A second client against the same server, with its own cookie jar.
    pub fn other_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }

    pub async fn post_sign_up(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/sign-up", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sign_in(&self, email: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/sign-in", self.address))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_refresh(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/refresh", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Refresh presenting an explicit token instead of the stored cookie.
    pub async fn post_refresh_with(&self, refresh_token: &str) -> reqwest::Response {
        self.other_client()
            .post(format!("{}/api/auth/refresh", self.address))
            .header(
                reqwest::header::COOKIE,
                format!("{REFRESH_COOKIE}={refresh_token}"),
            )
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_sign_out(&self) -> reqwest::Response {
        self.http_client
            .post(format!("{}/api/auth/sign-out", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete_member(&self, id: &str, access_token: &str) -> reqwest::Response {
        self.http_client
            .delete(format!("{}/api/members/{id}", self.address))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Signs up and signs in, returning the issued pair.
    pub async fn signed_in(&self, email: &str, password: &str) -> TokenPair {
        assert_eq!(self.post_sign_up(email, password).await.status(), 201);
        let response = self.post_sign_in(email, password).await;
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }
}

pub fn refresh_cookie(response: &reqwest::Response) -> Option<reqwest::cookie::Cookie<'_>> {
    response.cookies().find(|cookie| cookie.name() == REFRESH_COOKIE)
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.unwrap();
    body["error"].as_str().unwrap_or_default().to_owned()
}
