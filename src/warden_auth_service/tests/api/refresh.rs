use warden_core::TokenPair;

use crate::helpers::{TestApp, refresh_cookie};

#[tokio::test]
async fn should_rotate_refresh_token() {
    let app = TestApp::new().await;
    let t1 = app.signed_in("a@x.com", "pw1").await;

    let response = app.post_refresh().await;
    assert_eq!(response.status(), 200);
    let cookie_value = refresh_cookie(&response)
        .expect("rotated cookie")
        .value()
        .to_owned();
    let t2: TokenPair = response.json().await.unwrap();

    assert_ne!(t2.refresh_token, t1.refresh_token);
    assert_eq!(t2.refresh_token, cookie_value);
}

#[tokio::test]
async fn should_reject_replayed_refresh_token() {
    let app = TestApp::new().await;
    let t1 = app.signed_in("a@x.com", "pw1").await;

    assert_eq!(app.post_refresh_with(&t1.refresh_token).await.status(), 200);
    assert_eq!(app.post_refresh_with(&t1.refresh_token).await.status(), 401);
}

#[tokio::test]
async fn should_return_401_without_cookie() {
    let app = TestApp::new().await;

    let response = app.post_refresh().await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn should_return_401_for_garbage_token() {
    let app = TestApp::new().await;
    app.signed_in("a@x.com", "pw1").await;

    let response = app.post_refresh_with("garbage").await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn should_not_accept_access_token_as_refresh_token() {
    let app = TestApp::new().await;
    let pair = app.signed_in("a@x.com", "pw1").await;

    let response = app.post_refresh_with(&pair.access_token).await;

    assert_eq!(response.status(), 401);
}
