use warden_core::{AccountDirectory, Email, TokenPair};

use crate::helpers::{TestApp, refresh_cookie};

#[tokio::test]
async fn should_clear_session_and_cookie() {
    let app = TestApp::new().await;
    let pair = app.signed_in("a@x.com", "pw1").await;

    let response = app.post_sign_out().await;
    assert_eq!(response.status(), 200);
    let cookie = refresh_cookie(&response).expect("removal cookie");
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.max_age(), Some(std::time::Duration::ZERO));

    let email = Email::parse("a@x.com").unwrap();
    let account = app.account_store.find_by_email(&email).await.unwrap();
    assert!(!account.has_session());

    assert_eq!(app.post_refresh_with(&pair.refresh_token).await.status(), 401);
}

#[tokio::test]
async fn should_return_401_when_already_signed_out() {
    let app = TestApp::new().await;
    app.signed_in("a@x.com", "pw1").await;

    assert_eq!(app.post_sign_out().await.status(), 200);
    assert_eq!(app.post_sign_out().await.status(), 401);
}

#[tokio::test]
async fn full_session_scenario() {
    let app = TestApp::new().await;

    assert_eq!(app.post_sign_up("a@x.com", "pw1").await.status(), 201);
    assert_eq!(app.post_sign_up("a@x.com", "pw2").await.status(), 409);

    let t1: TokenPair = app.post_sign_in("a@x.com", "pw1").await.json().await.unwrap();
    let t2: TokenPair = app.post_refresh().await.json().await.unwrap();
    assert_ne!(t1.refresh_token, t2.refresh_token);
    assert_eq!(app.post_refresh_with(&t1.refresh_token).await.status(), 401);

    assert_eq!(app.post_sign_out().await.status(), 200);
    assert_eq!(app.post_refresh_with(&t2.refresh_token).await.status(), 401);
}
