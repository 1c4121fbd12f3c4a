use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn should_return_201_for_fresh_email() {
    let app = TestApp::new().await;

    let response = app.post_sign_up("a@x.com", "pw1").await;

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn should_return_409_for_registered_email_regardless_of_password() {
    let app = TestApp::new().await;
    app.post_sign_up("a@x.com", "pw1").await;

    for password in ["pw1", "pw2"] {
        let response = app.post_sign_up("a@x.com", password).await;
        assert_eq!(response.status(), 409);
    }
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let cases = [("not-an-email", "pw1"), ("a@x.com", ""), ("", "")];
    for (email, password) in cases {
        let response = app.post_sign_up(email, password).await;
        assert_eq!(response.status(), 400, "input: {email:?} / {password:?}");
        assert!(!error_message(response).await.is_empty());
    }
}

#[tokio::test]
async fn should_return_422_for_malformed_body() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/auth/sign-up", app.address))
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
}
