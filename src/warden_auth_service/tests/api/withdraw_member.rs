use warden_adapters::Argon2PasswordHasher;
use warden_core::{Account, AccountDirectory, Email, Password, PasswordHasher, Role, TokenPair};

use crate::helpers::{TestApp, refresh_cookie};

async fn member_id(app: &TestApp, email: &str) -> String {
    let email = Email::parse(email).unwrap();
    app.account_store
        .find_by_email(&email)
        .await
        .unwrap()
        .id()
        .to_string()
}

#[tokio::test]
async fn owner_withdrawal_deletes_account_and_clears_cookie() {
    let app = TestApp::new().await;
    let pair = app.signed_in("a@x.com", "pw1").await;
    let id = member_id(&app, "a@x.com").await;

    let response = app.delete_member(&id, &pair.access_token).await;
    assert_eq!(response.status(), 200);
    let cookie = refresh_cookie(&response).expect("removal cookie");
    assert_eq!(cookie.value(), "");

    assert_eq!(app.post_sign_in("a@x.com", "pw1").await.status(), 401);
}

#[tokio::test]
async fn user_cannot_withdraw_someone_else() {
    let app = TestApp::new().await;
    app.signed_in("b@x.com", "pw1").await;
    let b_id = member_id(&app, "b@x.com").await;
    let a = app.signed_in("a@x.com", "pw1").await;

    let response = app.delete_member(&b_id, &a.access_token).await;

    assert_eq!(response.status(), 403);
    assert_eq!(app.post_sign_in("b@x.com", "pw1").await.status(), 200);
}

#[tokio::test]
async fn admin_withdrawal_of_other_member_keeps_admin_cookie() {
    let app = TestApp::new().await;
    app.signed_in("b@x.com", "pw1").await;
    let b_id = member_id(&app, "b@x.com").await;

    let hash = Argon2PasswordHasher
        .hash(&Password::parse("admin-pw").unwrap())
        .await
        .unwrap();
    let admin =
        Account::new_local(Email::parse("admin@x.com").unwrap(), hash).with_role(Role::Admin);
    app.account_store.create(admin).await.unwrap();
    let admin_pair: TokenPair = app
        .post_sign_in("admin@x.com", "admin-pw")
        .await
        .json()
        .await
        .unwrap();

    let response = app.delete_member(&b_id, &admin_pair.access_token).await;

    assert_eq!(response.status(), 200);
    assert!(refresh_cookie(&response).is_none());
    assert_eq!(app.post_sign_in("b@x.com", "pw1").await.status(), 401);
    assert_eq!(app.post_refresh().await.status(), 200);
}

#[tokio::test]
async fn withdrawal_requires_valid_access_token() {
    let app = TestApp::new().await;
    let pair = app.signed_in("a@x.com", "pw1").await;
    let id = member_id(&app, "a@x.com").await;

    assert_eq!(app.delete_member(&id, "garbage").await.status(), 401);
    assert_eq!(
        app.delete_member(&id, &pair.refresh_token).await.status(),
        401
    );

    let response = app
        .http_client
        .delete(format!("{}/api/members/{id}", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn withdrawal_rejects_malformed_member_id() {
    let app = TestApp::new().await;
    let pair = app.signed_in("a@x.com", "pw1").await;

    let response = app.delete_member("42", &pair.access_token).await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn admin_withdrawing_missing_member_gets_404() {
    let app = TestApp::new().await;
    let hash = Argon2PasswordHasher
        .hash(&Password::parse("admin-pw").unwrap())
        .await
        .unwrap();
    let admin =
        Account::new_local(Email::parse("admin@x.com").unwrap(), hash).with_role(Role::Admin);
    app.account_store.create(admin).await.unwrap();
    let admin_pair: TokenPair = app
        .post_sign_in("admin@x.com", "admin-pw")
        .await
        .json()
        .await
        .unwrap();

    let response = app
        .delete_member(&uuid::Uuid::new_v4().to_string(), &admin_pair.access_token)
        .await;

    assert_eq!(response.status(), 404);
}
