use warden_core::{AccountDirectory, Email, SessionStore, TokenPair};

use crate::helpers::{TestApp, error_message, refresh_cookie};

#[tokio::test]
async fn should_return_token_pair_and_set_refresh_cookie() {
    let app = TestApp::new().await;
    app.post_sign_up("a@x.com", "pw1").await;

    let response = app.post_sign_in("a@x.com", "pw1").await;
    assert_eq!(response.status(), 200);

    let cookie = refresh_cookie(&response).expect("refresh cookie");
    assert!(cookie.http_only());
    assert_eq!(cookie.path(), Some("/api/auth"));
    assert_eq!(cookie.max_age(), Some(std::time::Duration::from_secs(600)));
    let cookie_value = cookie.value().to_owned();

    let pair: TokenPair = response.json().await.unwrap();
    assert_eq!(pair.grant_type, "Bearer");
    assert_eq!(pair.refresh_token, cookie_value);
    assert!(pair.access_token_expires_at < pair.refresh_token_expires_at);

    let email = Email::parse("a@x.com").unwrap();
    let account = app.account_store.find_by_email(&email).await.unwrap();
    let stored = app.account_store.find_by_subject(account.id()).await.unwrap();
    assert_eq!(stored.refresh_token(), pair.refresh_token);
}

#[tokio::test]
async fn should_return_identical_401_for_unknown_email_and_wrong_password() {
    let app = TestApp::new().await;
    app.post_sign_up("a@x.com", "pw1").await;

    let wrong_password = app.post_sign_in("a@x.com", "pw2").await;
    let unknown_email = app.post_sign_in("b@x.com", "pw1").await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_email.status(), 401);
    assert!(refresh_cookie(&wrong_password).is_none());
    assert_eq!(
        error_message(wrong_password).await,
        error_message(unknown_email).await
    );
}

#[tokio::test]
async fn should_return_400_for_invalid_email() {
    let app = TestApp::new().await;

    let response = app.post_sign_in("nope", "pw1").await;

    assert_eq!(response.status(), 400);
}
