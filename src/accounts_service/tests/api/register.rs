use secrecy::ExposeSecret;

use crate::helpers::{AccountBody, Credentials, ErrorBody, TestApp};

#[tokio::test]
async fn should_return_201_with_public_fields() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();

    let response = app.post_register(&credentials.register_body()).await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    let account: AccountBody = serde_json::from_value(body).unwrap();
    assert_eq!(account.name, credentials.name);
    assert_eq!(account.email, credentials.email.to_lowercase());
}

#[tokio::test]
async fn should_not_start_a_session() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();

    let response = app.post_register(&credentials.register_body()).await;
    assert_eq!(response.status().as_u16(), 201);
    assert!(response.cookies().next().is_none());

    assert_eq!(app.get_profile().await.status().as_u16(), 401);
}

#[tokio::test]
async fn should_never_store_the_plaintext_password() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();

    let account: AccountBody = app
        .post_register(&credentials.register_body())
        .await
        .json()
        .await
        .unwrap();

    let stored = app.stored_account(account.id).await;
    assert_ne!(
        stored.password_hash().as_ref().expose_secret(),
        &credentials.password
    );
}

#[tokio::test]
async fn should_return_409_for_a_taken_email_in_any_case() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();

    let response = app.post_register(&credentials.register_body()).await;
    assert_eq!(response.status().as_u16(), 201);

    let shouted = serde_json::json!({
        "name": "Someone Else",
        "email": format!("  {}  ", credentials.email.to_uppercase()),
        "password": "another-password",
    });
    let response = app.post_register(&shouted).await;

    assert_eq!(response.status().as_u16(), 409);
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(body.error, "User already exists");
}

#[tokio::test]
async fn should_return_400_naming_the_missing_field() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "email": "ada@example.com", "password": "password123" }),
            "Name is required",
        ),
        (
            serde_json::json!({ "name": "Ada", "password": "password123" }),
            "Email is required",
        ),
        (
            serde_json::json!({ "name": "Ada", "email": "ada.example.com", "password": "pw" }),
            "Invalid email address",
        ),
        (
            serde_json::json!({ "name": "Ada", "email": "ada@example.com" }),
            "Password is required",
        ),
        (
            serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "" }),
            "Password is required",
        ),
    ];

    for (body, message) in test_cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "input: {body}");

        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, message, "input: {body}");
    }
}

#[tokio::test]
async fn should_return_400_for_unparseable_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(app.url("/api/users/register"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let error: ErrorBody = response.json().await.unwrap();
    assert!(!error.error.is_empty());
}
