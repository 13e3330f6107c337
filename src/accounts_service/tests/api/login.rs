use crate::helpers::{
    AccountBody, COOKIE_NAME, Credentials, ErrorBody, TOKEN_TTL_SECONDS, TestApp,
};

#[tokio::test]
async fn should_return_200_and_the_registered_account() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();

    let registered: AccountBody = app
        .post_register(&credentials.register_body())
        .await
        .json()
        .await
        .unwrap();

    let response = app.post_login(&credentials.login_body()).await;
    assert_eq!(response.status().as_u16(), 200);

    let logged_in: AccountBody = response.json().await.unwrap();
    assert_eq!(logged_in.id, registered.id);
    assert_eq!(logged_in.name, registered.name);
}

#[tokio::test]
async fn should_log_in_every_registered_account() {
    let app = TestApp::new().await;

    for _ in 0..5 {
        let credentials = Credentials::random();
        let registered: AccountBody = app
            .post_register(&credentials.register_body())
            .await
            .json()
            .await
            .unwrap();

        let response = app.post_login(&credentials.login_body()).await;
        assert_eq!(response.status().as_u16(), 200);

        let logged_in: AccountBody = response.json().await.unwrap();
        assert_eq!(logged_in.id, registered.id);
    }
}

#[tokio::test]
async fn should_set_an_http_only_session_cookie() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();
    app.post_register(&credentials.register_body()).await;

    let response = app.post_login(&credentials.login_body()).await;

    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .expect("No session cookie found");
    assert!(!cookie.value().is_empty());
    assert!(cookie.http_only());
    assert!(cookie.same_site_strict());
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(
        cookie.max_age(),
        Some(std::time::Duration::from_secs(TOKEN_TTL_SECONDS as u64))
    );
}

#[tokio::test]
async fn should_accept_the_email_in_any_case() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();
    app.post_register(&credentials.register_body()).await;

    let body = serde_json::json!({
        "email": credentials.email.to_uppercase(),
        "password": credentials.password,
    });

    assert_eq!(app.post_login(&body).await.status().as_u16(), 200);
}

#[tokio::test]
async fn should_return_the_same_401_for_unknown_email_and_wrong_password() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();
    app.post_register(&credentials.register_body()).await;

    let wrong_password = serde_json::json!({
        "email": credentials.email,
        "password": "not-the-password",
    });
    let unknown_email = serde_json::json!({
        "email": "nobody@example.com",
        "password": credentials.password,
    });

    for body in [wrong_password, unknown_email] {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 401, "input: {body}");
        assert!(response.cookies().next().is_none());

        let error: ErrorBody = response.json().await.unwrap();
        assert_eq!(error.error, "Invalid email or password");
    }
}

#[tokio::test]
async fn should_return_the_generic_401_for_unusable_fields() {
    let app = TestApp::new().await;
    let credentials = Credentials::random();
    app.post_register(&credentials.register_body()).await;

    let wrong_password = serde_json::json!({
        "email": credentials.email,
        "password": "not-the-password",
    });
    let expected = app.post_login(&wrong_password).await.text().await.unwrap();

    let test_cases = [
        serde_json::json!({ "password": credentials.password }),
        serde_json::json!({ "email": credentials.email }),
        serde_json::json!({ "email": credentials.email, "password": "" }),
        serde_json::json!({ "email": "not-an-email", "password": credentials.password }),
        serde_json::json!({}),
    ];

    for body in test_cases {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 401, "input: {body}");
        assert_eq!(response.text().await.unwrap(), expected, "input: {body}");
    }
}

#[tokio::test]
async fn should_return_400_for_unparseable_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(app.url("/api/users/login"))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{\"email\":")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let error: ErrorBody = response.json().await.unwrap();
    assert!(!error.error.is_empty());
}
