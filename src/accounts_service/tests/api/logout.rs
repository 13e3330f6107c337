use crate::helpers::{COOKIE_NAME, TestApp};

#[tokio::test]
async fn should_return_200_and_clear_the_cookie() {
    let app = TestApp::new().await;
    app.signed_in().await;
    assert_eq!(app.get_profile().await.status().as_u16(), 200);

    let response = app.post_logout().await;
    assert_eq!(response.status().as_u16(), 200);

    let cookie = response
        .cookies()
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .expect("No removal cookie found");
    assert!(cookie.value().is_empty());
    assert_eq!(cookie.max_age(), Some(std::time::Duration::ZERO));

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].is_string());

    assert_eq!(app.get_profile().await.status().as_u16(), 401);
}

#[tokio::test]
async fn should_succeed_without_a_session() {
    let app = TestApp::new().await;

    let response = app.post_logout().await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn should_leave_copies_of_the_token_valid_until_expiry() {
    // There is no revocation list: logout only affects the client that
    // honours the removal cookie.
    let app = TestApp::new().await;
    let credentials = crate::helpers::Credentials::random();
    app.post_register(&credentials.register_body()).await;

    let response = app.post_login(&credentials.login_body()).await;
    let token = response
        .cookies()
        .find(|cookie| cookie.name() == COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .expect("No session cookie found");

    app.post_logout().await;

    let replayed = app
        .get_profile_with_cookie(Some(&format!("{COOKIE_NAME}={token}")))
        .await;
    assert_eq!(replayed.status().as_u16(), 200);
}
